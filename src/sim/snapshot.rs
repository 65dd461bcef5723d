//! Render-ready view of the session

use glam::IVec2;
use serde::Serialize;

use super::state::{Phase, SessionState};
use crate::consts::TICKS_PER_HUD_SECOND;

/// Everything the renderer needs for one frame, menus included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub phase: Phase,
    pub player: IVec2,
    pub bullets: Vec<IVec2>,
    pub targets: Vec<IVec2>,
    pub score: i32,
    /// Countdown in ticks
    pub time_left: u32,
    /// Countdown as shown on the HUD
    pub seconds_left: u32,
    pub game_over: bool,
    pub game_won: bool,
    pub paused: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &SessionState) -> Self {
        let entities = &state.entities;
        Self {
            phase: state.phase,
            player: entities.player.pos,
            bullets: entities.bullets.iter().map(|b| b.pos).collect(),
            targets: entities.targets.iter().map(|t| t.pos).collect(),
            score: state.score,
            time_left: state.time_left,
            seconds_left: state.time_left / TICKS_PER_HUD_SECOND,
            game_over: state.terminal.game_over,
            game_won: state.terminal.game_won,
            paused: state.phase == Phase::Paused,
        }
    }
}
