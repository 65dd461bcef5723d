//! Point-distance collision tests
//!
//! Entities are circles centred on their position; a hit is a strict
//! `distance < radius` comparison.

use glam::IVec2;

use crate::consts::{PLAYER_SIZE, TARGET_SIZE};
use crate::distance;

/// Bullet hits target when closer than half the target's size
pub const BULLET_HIT_RADIUS: f64 = (TARGET_SIZE / 2) as f64;

/// Target reaches player when closer than half the summed sizes
pub const PLAYER_HIT_RADIUS: f64 = (PLAYER_SIZE / 2 + TARGET_SIZE / 2) as f64;

#[inline]
pub fn bullet_hits_target(bullet: IVec2, target: IVec2) -> bool {
    distance(bullet, target) < BULLET_HIT_RADIUS
}

#[inline]
pub fn target_hits_player(target: IVec2, player: IVec2) -> bool {
    distance(target, player) < PLAYER_HIT_RADIUS
}
