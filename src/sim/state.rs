//! Session state and core simulation types
//!
//! Everything the tick engine and the state machine mutate lives in one owned
//! `SessionState`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::field_center;

/// Active screen/phase of the session. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, nothing simulated
    StartMenu,
    /// Settings screen (volume stub)
    Settings,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, no ticks delivered
    Paused,
    /// Run lost
    GameOver,
    /// Run won
    GameWon,
}

impl Phase {
    /// Whether a run has been started (anything past the menus)
    pub fn is_started(self) -> bool {
        !matches!(self, Phase::StartMenu | Phase::Settings)
    }

    /// GameOver or GameWon
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::GameWon)
    }
}

/// Audio cue requested by the simulation (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Bullet fired
    Shoot,
    /// Bullet destroyed a target
    Hit,
    /// A loss condition was raised
    GameOver,
}

/// The player's avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
}

impl Default for Player {
    fn default() -> Self {
        Self { pos: field_center() }
    }
}

/// A projectile travelling upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: IVec2,
}

/// A descending target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub pos: IVec2,
}

/// Entity store: the player plus bullets and targets in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub targets: Vec<Target>,
}

impl Entities {
    /// Append a bullet at the given position
    pub fn add_bullet(&mut self, pos: IVec2) {
        self.bullets.push(Bullet { pos });
    }

    /// Append a target at the given position
    pub fn add_target(&mut self, pos: IVec2) {
        self.targets.push(Target { pos });
    }

    /// Remove and return a bullet, keeping the order of the rest
    pub fn remove_bullet(&mut self, index: usize) -> Bullet {
        self.bullets.remove(index)
    }

    /// Remove and return a target, keeping the order of the rest
    pub fn remove_target(&mut self, index: usize) -> Target {
        self.targets.remove(index)
    }

    pub fn clear(&mut self) {
        self.player = Player::default();
        self.bullets.clear();
        self.targets.clear();
    }
}

/// Terminal conditions raised by the engine.
///
/// Loss and win are checked independently, so both may be set after one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalFlags {
    pub game_over: bool,
    pub game_won: bool,
}

impl TerminalFlags {
    pub fn any(&self) -> bool {
        self.game_over || self.game_won
    }

    /// Phase the session settles into. Loss wins ties.
    pub fn resolve(&self) -> Option<Phase> {
        if self.game_over {
            Some(Phase::GameOver)
        } else if self.game_won {
            Some(Phase::GameWon)
        } else {
            None
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Current phase
    pub phase: Phase,
    /// Player, bullets, targets
    pub entities: Entities,
    /// Signed score
    pub score: i32,
    /// Countdown ticks remaining
    pub time_left: u32,
    /// Terminal conditions raised since the last reset
    pub terminal: TerminalFlags,
    /// Ticks simulated since the last reset
    pub ticks: u64,
    rng: Pcg32,
}

impl SessionState {
    /// Create a session sitting in the start menu with a fresh wave of targets
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: Phase::StartMenu,
            entities: Entities::default(),
            score: 0,
            time_left: GAME_DURATION,
            terminal: TerminalFlags::default(),
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_targets();
        state
    }

    /// Full reset: recentre the player, drop bullets, respawn targets, restore
    /// score and timer, clear terminal flags. The phase is left to the caller.
    pub fn reset(&mut self) {
        self.entities.clear();
        self.score = 0;
        self.time_left = GAME_DURATION;
        self.terminal = TerminalFlags::default();
        self.ticks = 0;
        self.spawn_targets();
        log::info!("Session reset ({} targets)", self.entities.targets.len());
    }

    /// Spawn `TARGET_COUNT` targets along the top band
    fn spawn_targets(&mut self) {
        for _ in 0..TARGET_COUNT {
            let x = self.rng.random_range(0..FIELD_WIDTH);
            let y = self.rng.random_range(0..TARGET_SPAWN_BAND);
            self.entities.add_target(IVec2::new(x, y));
        }
    }

    /// Fire a bullet from the player's current position
    pub fn fire(&mut self) {
        let pos = self.entities.player.pos;
        self.entities.add_bullet(pos);
        log::debug!("Bullet fired at ({}, {})", pos.x, pos.y);
    }
}
