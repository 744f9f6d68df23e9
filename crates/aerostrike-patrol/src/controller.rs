//! Per-frame patrol motion for the whole fleet.

use std::f64::consts::TAU;

use glam::Vec2;

use aerostrike_core::components::AerialTarget;
use aerostrike_core::constants::HEADING_SMOOTHING;

use crate::heading::{lerp_angle, travel_heading};
use crate::paths::position_at;

/// Drives every live target along its patrol path.
///
/// Motion is a pure function of cumulative elapsed time, so frame-rate
/// variance never accumulates into path drift.
#[derive(Debug, Clone, Copy)]
pub struct PatrolMotionController {
    /// Fraction of the heading error closed per update.
    pub heading_smoothing: f32,
}

impl Default for PatrolMotionController {
    fn default() -> Self {
        Self {
            heading_smoothing: HEADING_SMOOTHING,
        }
    }
}

impl PatrolMotionController {
    pub fn new(heading_smoothing: f32) -> Self {
        Self { heading_smoothing }
    }

    /// Update all targets to `elapsed` seconds. Destroyed targets stay frozen.
    ///
    /// `elapsed` stays `f64` until the angles are reduced to one turn, so
    /// long sessions keep sub-frame resolution.
    pub fn update(&self, targets: &mut [AerialTarget], elapsed: f64) {
        for target in targets.iter_mut().filter(|t| !t.destroyed) {
            self.update_target(target, elapsed);
        }
    }

    /// Update a single target. No-op if it is destroyed.
    pub fn update_target(&self, target: &mut AerialTarget, elapsed: f64) {
        if target.destroyed {
            return;
        }

        let phase = target.initial_phase as f64 + target.angular_speed as f64 * elapsed;
        target.phase_angle = phase as f32;

        target.position = position_at(
            target.center,
            &target.path,
            &target.hover,
            phase.rem_euclid(TAU) as f32,
            elapsed,
        );

        let horizontal = Vec2::new(target.position.x, target.position.z);
        if let Some(previous) = target.previous_horizontal {
            if let Some(desired) = travel_heading(previous, horizontal) {
                target.heading = lerp_angle(target.heading, desired, self.heading_smoothing);
            }
        }
        target.previous_horizontal = Some(horizontal);
        target.spin_angle = (target.spin_rate as f64 * elapsed).rem_euclid(TAU) as f32;
    }
}
