//! Heading math.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use aerostrike_core::constants::HEADING_MIN_DELTA;

/// Wrap an angle into [-PI, PI).
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Move `from` toward `to` by fraction `t` along the shorter arc.
/// The result is wrapped into [0, TAU).
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let delta = wrap_angle(to - from);
    (from + delta * t).rem_euclid(TAU)
}

/// Heading about +Y for a horizontal move from `previous` to `current`
/// (0 faces +Z). `None` when the move is too short to define a direction.
pub fn travel_heading(previous: Vec2, current: Vec2) -> Option<f32> {
    let delta = current - previous;
    if delta.length_squared() < HEADING_MIN_DELTA * HEADING_MIN_DELTA {
        return None;
    }
    Some(delta.x.atan2(delta.y))
}
