//! Session commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next step boundary.

use serde::{Deserialize, Serialize};

/// Session-level actions. Per-frame flight controls travel in
/// [`ControlInput`](crate::input::ControlInput) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Spawn the aircraft, camera, and target fleet.
    StartMission,
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Tear down every node and start a fresh mission.
    Restart,
}
