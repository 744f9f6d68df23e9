//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Camera operating mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Damped chase position behind and above the aircraft.
    #[default]
    Follow,
    /// Free orbit around a fixed anchor.
    Orbit,
}

impl CameraMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Follow => CameraMode::Orbit,
            CameraMode::Orbit => CameraMode::Follow,
        }
    }
}

/// Patrol path family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    Circular,
    FigureEight,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing spawned yet.
    #[default]
    Standby,
    Active,
    Paused,
    /// Every target is down. Flight continues.
    Complete,
}

impl GamePhase {
    /// Whether the per-frame systems run in this phase.
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Active | GamePhase::Complete)
    }
}

/// Kind of scene node the core asks the host to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Aircraft,
    Camera,
    Projectile,
    Target,
    ExplosionCore,
    ExplosionParticle,
}
