//! Events emitted by the simulation for UI, audio, and scorekeeping.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::CameraMode;

/// Something the presentation layer may react to. Drained once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Fleet spawned and the mission clock started.
    MissionStarted { total_targets: u32 },
    /// A round left the muzzle.
    ShotFired { position: Vec3 },
    /// A projectile brought down a target.
    TargetDestroyed {
        /// Stable index into the fleet.
        target_index: usize,
        position: Vec3,
        destroyed: u32,
        total: u32,
    },
    /// The camera switched modes.
    CameraModeChanged { mode: CameraMode },
    /// Every target is down.
    MissionComplete { elapsed_secs: f64 },
}
