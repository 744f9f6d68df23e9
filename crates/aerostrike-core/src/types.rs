//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Right-handed, Y-up scene space. Aircraft and projectiles fly along -Z
/// in their local frame.
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// World up axis.
pub const UP: Vec3 = Vec3::Y;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames handed to the engine, including discarded ones.
    pub frame: u64,
    /// Simulation clock in seconds. Discarded frames still advance it.
    pub elapsed_secs: f64,
    /// Frames dropped because their time step was unusable.
    pub skipped_frames: u64,
}

impl SimTime {
    /// Record a frame whose step was integrated.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }

    /// Record a frame whose integration was dropped. Time moves on unless
    /// `dt` itself is unusable.
    pub fn skip(&mut self, dt: f32) {
        self.frame += 1;
        self.skipped_frames += 1;
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_secs += dt as f64;
        }
    }
}
