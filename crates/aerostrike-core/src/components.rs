//! Entity records owned by the simulation.
//!
//! Components are plain data structs. Game logic lives in the sim and
//! patrol crates, not here.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_ALTITUDE, INITIAL_SPEED};
use crate::enums::PathKind;
use crate::scene::NodeId;

/// Player aircraft kinematic state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub position: Vec3,
    /// Always derived from (yaw, pitch, roll) in YXZ order.
    pub orientation: Quat,
    /// Airspeed (units/s).
    pub speed: f32,
    pub pitch: f32,
    pub roll: f32,
    /// Accumulated heading. Never wrapped.
    pub yaw: f32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, INITIAL_ALTITUDE, 0.0),
            orientation: Quat::IDENTITY,
            speed: INITIAL_SPEED,
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
        }
    }
}

/// Shape of a closed patrol trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PatrolPath {
    Circular { radius: f32 },
    /// Lemniscate of Bernoulli with independent half-widths.
    FigureEight { radius_x: f32, radius_z: f32 },
}

impl PatrolPath {
    pub fn kind(&self) -> PathKind {
        match self {
            PatrolPath::Circular { .. } => PathKind::Circular,
            PatrolPath::FigureEight { .. } => PathKind::FigureEight,
        }
    }
}

/// Vertical bobbing applied on top of the horizontal path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverParams {
    pub baseline_y: f32,
    pub amplitude: f32,
    /// Angular frequency (rad/s).
    pub frequency: f32,
    pub phase_offset: f32,
}

/// A patrolling aerial target. Created once per mission and soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerialTarget {
    pub node: NodeId,
    /// Path center. Immutable for the target's lifetime.
    pub center: Vec3,
    pub path: PatrolPath,
    /// Path parameter at elapsed time zero.
    pub initial_phase: f32,
    /// Path parameter rate (rad/s).
    pub angular_speed: f32,
    /// Current path parameter. Advances monotonically.
    pub phase_angle: f32,
    pub hover: HoverParams,
    /// Smoothed direction of travel about +Y.
    pub heading: f32,
    /// Decorative spin rate about +Y (rad/s).
    pub spin_rate: f32,
    /// Accumulated decorative spin.
    pub spin_angle: f32,
    pub position: Vec3,
    /// Horizontal (x, z) position from the previous motion update.
    pub previous_horizontal: Option<Vec2>,
    /// Soft-delete flag. Never cleared once set.
    pub destroyed: bool,
}

impl AerialTarget {
    pub fn new(
        node: NodeId,
        center: Vec3,
        path: PatrolPath,
        initial_phase: f32,
        angular_speed: f32,
        hover: HoverParams,
    ) -> Self {
        Self {
            node,
            center,
            path,
            initial_phase,
            angular_speed,
            phase_angle: initial_phase,
            hover,
            heading: 0.0,
            spin_rate: 0.0,
            spin_angle: 0.0,
            position: center,
            previous_horizontal: None,
            destroyed: false,
        }
    }

    pub fn with_spin(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    /// Rendered orientation: travel heading plus decorative spin.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.heading + self.spin_angle)
    }
}

/// A fired round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub node: NodeId,
    pub position: Vec3,
    /// Displacement per nominal frame.
    pub velocity: Vec3,
    pub age: f32,
    pub max_age: f32,
    pub active: bool,
}

/// Expanding, fading glow at an explosion's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreGlow {
    pub node: NodeId,
    pub scale: f32,
    pub opacity: f32,
}

/// One debris particle of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub node: NodeId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Scale at spawn; the live scale is derived from it.
    pub base_scale: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Short-lived destruction effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub origin: Vec3,
    pub age: f32,
    pub max_age: f32,
    pub core: CoreGlow,
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Every scene node owned by this effect.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.core.node).chain(self.particles.iter().map(|p| p.node))
    }
}
