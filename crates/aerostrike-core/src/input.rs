//! Per-frame control snapshot produced by the host's input layer.

use serde::{Deserialize, Serialize};

/// Pointer-driven orbit deltas, already scaled by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitInput {
    /// Horizontal drag (positive rotates the camera to the right).
    pub rotate_x: f32,
    /// Vertical drag (positive tilts the camera upward).
    pub rotate_y: f32,
    /// Wheel delta (positive moves away from the anchor).
    pub zoom: f32,
}

/// Normalized control state for one frame. Never retained past the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Nose up is positive. Range [-1, 1].
    pub pitch: f32,
    /// Positive banks the aircraft toward positive roll. Range [-1, 1].
    pub roll: f32,
    /// Positive speeds up. Range [-1, 1].
    pub throttle: f32,
    /// Trigger held.
    pub fire: bool,
    /// The camera toggle key went down this frame.
    pub camera_toggle: bool,
    pub orbit: OrbitInput,
}

impl ControlInput {
    /// Clamp every axis into [-1, 1], mapping non-finite values to 0.
    pub fn normalized(&self) -> Self {
        Self {
            pitch: unit_axis(self.pitch),
            roll: unit_axis(self.roll),
            throttle: unit_axis(self.throttle),
            fire: self.fire,
            camera_toggle: self.camera_toggle,
            orbit: OrbitInput {
                rotate_x: finite_or_zero(self.orbit.rotate_x),
                rotate_y: finite_or_zero(self.orbit.rotate_y),
                zoom: finite_or_zero(self.orbit.zoom),
            },
        }
    }
}

fn unit_axis(value: f32) -> f32 {
    finite_or_zero(value).clamp(-1.0, 1.0)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
