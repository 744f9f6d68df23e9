//! Arcade flight model for the player aircraft.
//!
//! Attitude is integrated as explicit Euler angles and the orientation is
//! rebuilt from them every step in yaw → pitch → roll order, so rolling
//! always happens about the aircraft's own nose axis.

use glam::{EulerRot, Quat, Vec3};

use aerostrike_core::components::FlightState;
use aerostrike_core::constants::*;
use aerostrike_core::input::ControlInput;
use aerostrike_core::scene::{NodeId, SceneGraph};
use aerostrike_core::types::FORWARD;

/// Integrates the player aircraft from control input.
#[derive(Debug, Clone, Default)]
pub struct FlightDynamicsModel {
    state: FlightState,
}

impl FlightDynamicsModel {
    pub fn new(state: FlightState) -> Self {
        let mut model = Self { state };
        model.state.orientation = orientation_from_angles(model.state.yaw, model.state.pitch, model.state.roll);
        model
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Unit vector along the aircraft's nose.
    pub fn forward(&self) -> Vec3 {
        self.state.orientation * FORWARD
    }

    /// Advance one step. Inputs are clamped, never rejected.
    pub fn update(&mut self, dt: f32, input: &ControlInput) {
        // The engine hands over normalized input already; direct callers may not.
        let input = input.normalized();
        let s = &mut self.state;

        if input.pitch != 0.0 {
            s.pitch += input.pitch * PITCH_SENSITIVITY * dt;
        } else {
            s.pitch = auto_level(s.pitch, AUTO_LEVEL_RATE * dt);
        }
        s.pitch = s.pitch.clamp(-MAX_PITCH, MAX_PITCH);

        if input.roll != 0.0 {
            s.roll += input.roll * ROLL_SENSITIVITY * dt;
            s.roll = s.roll.clamp(-MAX_ROLL, MAX_ROLL);
            // Bank-to-turn: turn rate follows how far we are banked.
            s.yaw += s.roll * TURN_SENSITIVITY * dt;
        } else {
            s.roll = auto_level(s.roll, AUTO_LEVEL_RATE * dt);
        }

        s.orientation = orientation_from_angles(s.yaw, s.pitch, s.roll);

        let velocity = (s.orientation * FORWARD) * s.speed;
        s.position += velocity * dt;

        s.speed = (s.speed + input.throttle * THROTTLE_RATE * dt).clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Publish the aircraft transform to its scene node.
    pub fn apply_to(&self, scene: &mut impl SceneGraph, node: NodeId) {
        scene.set_position(node, self.state.position);
        scene.set_orientation(node, self.state.orientation);
    }
}

/// Compose yaw (about Y), then pitch (about X), then roll (about Z).
pub fn orientation_from_angles(yaw: f32, pitch: f32, roll: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll)
}

/// Move `angle` toward zero by `step`, landing exactly on zero instead of
/// crossing it.
fn auto_level(angle: f32, step: f32) -> f32 {
    if angle.abs() <= step {
        0.0
    } else {
        angle - step * angle.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_level_snaps_to_zero() {
        assert_eq!(auto_level(0.01, 0.025), 0.0);
        assert_eq!(auto_level(-0.01, 0.025), 0.0);
        assert!((auto_level(0.5, 0.1) - 0.4).abs() < 1e-6);
        assert!((auto_level(-0.5, 0.1) + 0.4).abs() < 1e-6);
        assert_eq!(auto_level(0.0, 0.1), 0.0);
    }

    #[test]
    fn test_orientation_order_is_yaw_pitch_roll() {
        let (yaw, pitch, roll) = (0.7, 0.3, -0.4);
        let expected =
            Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch) * Quat::from_rotation_z(roll);
        let q = orientation_from_angles(yaw, pitch, roll);
        assert!(q.dot(expected).abs() > 1.0 - 1e-6);
    }
}
