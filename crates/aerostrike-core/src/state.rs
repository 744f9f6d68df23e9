//! Frame snapshot: the visible state handed to the presentation layer.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{CameraMode, GamePhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete HUD-facing state produced after each step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub aircraft: AircraftView,
    pub camera: CameraView,
    pub score: ScoreView,
    /// Cooldown elapsed; the next trigger pull fires.
    pub weapon_ready: bool,
    /// Projectiles in flight.
    pub projectiles: u32,
    /// Explosions still animating.
    pub explosions: u32,
    pub events: Vec<GameEvent>,
}

/// Aircraft readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Vec3,
    pub orientation: Quat,
    pub speed: f32,
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

/// Camera readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub destroyed: u32,
    pub total: u32,
}

impl ScoreView {
    pub fn all_destroyed(&self) -> bool {
        self.total > 0 && self.destroyed == self.total
    }
}
