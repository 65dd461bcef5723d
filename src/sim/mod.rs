//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick, no wall-clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{bullet_hits_target, target_hits_player};
pub use input::{InputLatch, Key, KeyEvent};
pub use session::{ExitRequest, Transition, on_press};
pub use snapshot::RenderSnapshot;
pub use state::{
    Bullet, Entities, Phase, Player, SessionState, SoundCue, Target, TerminalFlags,
};
pub use tick::{TickReport, tick};
