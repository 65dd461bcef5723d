//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one logical frame. The driver
//! withholds calls while paused, so there is no wall-clock in here.

use glam::IVec2;

use super::collision::{bullet_hits_target, target_hits_player};
use super::input::{InputLatch, Key};
use super::state::{Phase, SessionState, SoundCue, TerminalFlags};
use crate::consts::*;

/// Side effects of a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Audio cues in the order they were raised
    pub cues: Vec<SoundCue>,
    /// Terminal conditions raised during this tick
    pub raised: TerminalFlags,
    /// Targets destroyed this tick
    pub hits: u32,
    /// Bullets that left the field this tick
    pub misses: u32,
}

impl TickReport {
    /// Raise a loss. The game-over cue plays once per tick however many
    /// loss conditions trip.
    fn raise_game_over(&mut self) {
        if !self.raised.game_over {
            self.raised.game_over = true;
            self.cues.push(SoundCue::GameOver);
        }
    }

    fn raise_game_won(&mut self) {
        self.raised.game_won = true;
    }
}

/// Advance the session by one tick. No-op unless the session is `Playing`.
pub fn tick(state: &mut SessionState, input: &InputLatch) -> TickReport {
    let mut report = TickReport::default();
    if state.phase != Phase::Playing {
        return report;
    }
    state.ticks += 1;

    move_player(&mut state.entities.player.pos, input);
    advance_bullets(state, &mut report);
    advance_targets(state, &mut report);

    // Countdown
    if state.time_left > 0 {
        state.time_left -= 1;
    } else {
        report.raise_game_over();
    }

    // Score thresholds are independent checks, loss first
    if state.score <= LOSS_SCORE {
        report.raise_game_over();
    }
    if state.score >= WIN_SCORE {
        report.raise_game_won();
    }

    state.terminal.game_over |= report.raised.game_over;
    state.terminal.game_won |= report.raised.game_won;
    if let Some(phase) = report.raised.resolve() {
        log::info!(
            "Run ended at tick {}: {:?} (score {}, {} ticks left)",
            state.ticks,
            phase,
            state.score,
            state.time_left
        );
        state.phase = phase;
    }

    report
}

/// Apply one step per held direction. Diagonals are not normalized.
fn move_player(pos: &mut IVec2, input: &InputLatch) {
    if input.is_held(Key::Up) {
        pos.y -= PLAYER_STEP;
    }
    if input.is_held(Key::Down) {
        pos.y += PLAYER_STEP;
    }
    if input.is_held(Key::Left) {
        pos.x -= PLAYER_STEP;
    }
    if input.is_held(Key::Right) {
        pos.x += PLAYER_STEP;
    }
}

/// Move bullets up, cull the ones off the top, resolve hits.
///
/// Walks bullets back to front so removing index `i` leaves the unvisited
/// prefix untouched. Each bullet takes out at most the first target in list
/// order that it overlaps.
fn advance_bullets(state: &mut SessionState, report: &mut TickReport) {
    let entities = &mut state.entities;
    for i in (0..entities.bullets.len()).rev() {
        let bullet = &mut entities.bullets[i];
        bullet.pos.y -= BULLET_SPEED;
        let pos = bullet.pos;

        if pos.y < 0 {
            entities.remove_bullet(i);
            state.score -= MISS_PENALTY;
            report.misses += 1;
            continue;
        }

        let hit = entities
            .targets
            .iter()
            .position(|target| bullet_hits_target(pos, target.pos));
        if let Some(j) = hit {
            let target = entities.remove_target(j);
            entities.remove_bullet(i);
            state.score += HIT_REWARD;
            report.hits += 1;
            report.cues.push(SoundCue::Hit);
            log::debug!(
                "Target hit at ({}, {}), score {}",
                target.pos.x,
                target.pos.y,
                state.score
            );
        }
    }
}

/// Drift every target down and check it against the player.
/// A target touching the player ends the run but stays in place.
fn advance_targets(state: &mut SessionState, report: &mut TickReport) {
    let player = state.entities.player.pos;
    for target in &mut state.entities.targets {
        target.pos.y += TARGET_SPEED;
        if target_hits_player(target.pos, player) {
            report.raise_game_over();
        }
    }
}
