//! Session state machine
//!
//! Discrete key presses drive the menu/play/pause/end-screen lifecycle. Exit
//! transitions are returned as data; the host decides how to terminate.

use serde::{Deserialize, Serialize};

use super::input::Key;
use super::state::{Phase, SessionState, SoundCue};

/// Host shutdown requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitRequest {
    /// Escape before a run has started (start menu or settings)
    Quit,
    /// Confirm on the game-over screen
    Defeat,
    /// Confirm on the game-won screen
    Victory,
    /// Escape once a run has started
    Abort,
}

impl ExitRequest {
    /// Process status code for the host
    pub fn code(self) -> i32 {
        match self {
            ExitRequest::Quit => 0,
            ExitRequest::Defeat => 10,
            ExitRequest::Victory => 11,
            ExitRequest::Abort => 80,
        }
    }
}

/// Effects of handling one key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub cues: Vec<SoundCue>,
    pub exit: Option<ExitRequest>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn cue(cue: SoundCue) -> Self {
        Self {
            cues: vec![cue],
            exit: None,
        }
    }

    fn exit(request: ExitRequest) -> Self {
        Self {
            cues: Vec::new(),
            exit: Some(request),
        }
    }
}

/// Handle an edge-triggered key press against the current phase.
///
/// Movement keys never transition; they only feed the latch.
pub fn on_press(state: &mut SessionState, key: Key) -> Transition {
    use Phase::*;

    let from = state.phase;
    let transition = match (from, key) {
        (StartMenu, Key::Confirm) => {
            state.phase = Playing;
            Transition::none()
        }
        (StartMenu, Key::Settings) => {
            state.phase = Settings;
            Transition::none()
        }
        (Settings, Key::Settings) => {
            state.phase = StartMenu;
            Transition::none()
        }
        (phase, Key::Cancel) if !phase.is_started() => Transition::exit(ExitRequest::Quit),
        (_, Key::Cancel) => Transition::exit(ExitRequest::Abort),

        (Playing, Key::Fire) => {
            state.fire();
            Transition::cue(SoundCue::Shoot)
        }
        (Playing, Key::Pause) => {
            state.phase = Paused;
            Transition::none()
        }
        (Paused, Key::Pause) => {
            state.phase = Playing;
            Transition::none()
        }

        (GameOver | GameWon | Paused, Key::Menu) => {
            state.reset();
            state.phase = StartMenu;
            Transition::none()
        }
        (phase, Key::Restart) if phase.is_terminal() => {
            state.reset();
            state.phase = Playing;
            Transition::none()
        }
        (GameOver, Key::Confirm) => Transition::exit(ExitRequest::Defeat),
        (GameWon, Key::Confirm) => Transition::exit(ExitRequest::Victory),

        (
            StartMenu | Settings | Playing | Paused | GameOver | GameWon,
            Key::Up
            | Key::Down
            | Key::Left
            | Key::Right
            | Key::Fire
            | Key::Pause
            | Key::Confirm
            | Key::Settings
            | Key::Restart
            | Key::Menu,
        ) => Transition::none(),
    };

    if state.phase != from {
        log::info!("Phase {:?} -> {:?} ({:?})", from, state.phase, key);
    }
    if let Some(exit) = transition.exit {
        log::info!("Exit requested from {:?}: {:?} (code {})", from, exit, exit.code());
    }
    transition
}
