//! StArWaRs - a single-player arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state machine, tick engine)
//! - `audio`: Sound cue sink
//! - `renderer`: Render snapshot sink
//! - `settings`: Host configuration
//! - `game`: Fixed-cadence frame driver tying input, sim and sinks together

pub mod audio;
pub mod game;
pub mod renderer;
pub mod script;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 1400;
    pub const FIELD_HEIGHT: i32 = 800;

    /// Fixed frame interval (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Player bounding box edge
    pub const PLAYER_SIZE: i32 = 30;
    /// Player displacement per held direction per tick
    pub const PLAYER_STEP: i32 = 5;

    /// Target logical diameter
    pub const TARGET_SIZE: i32 = 20;
    /// Targets spawned per session
    pub const TARGET_COUNT: usize = 9;
    /// Targets spawn with y in [0, band)
    pub const TARGET_SPAWN_BAND: i32 = 1;
    /// Downward drift per tick
    pub const TARGET_SPEED: i32 = 1;

    /// Upward travel per tick
    pub const BULLET_SPEED: i32 = 10;
    /// Drawn bullet diameter (render hint only)
    pub const BULLET_SIZE: i32 = 10;

    /// Score lost when a bullet leaves the top of the field
    pub const MISS_PENALTY: i32 = 10;
    /// Score gained per destroyed target
    pub const HIT_REWARD: i32 = 10;
    /// Score at or below which the session is lost
    pub const LOSS_SCORE: i32 = -50;
    /// Score at or above which the session is won
    pub const WIN_SCORE: i32 = 50;

    /// Countdown length in ticks
    pub const GAME_DURATION: u32 = 600;
    /// Ticks per displayed HUD second
    pub const TICKS_PER_HUD_SECOND: u32 = 20;
}

/// Euclidean distance between two integer points
#[inline]
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    a.as_dvec2().distance(b.as_dvec2())
}

/// Centre of the play field, where the player starts
#[inline]
pub fn field_center() -> IVec2 {
    IVec2::new(consts::FIELD_WIDTH / 2, consts::FIELD_HEIGHT / 2)
}
