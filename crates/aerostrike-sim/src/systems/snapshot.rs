//! Snapshot system: reads simulation state and builds a `FrameSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use aerostrike_core::enums::GamePhase;
use aerostrike_core::events::GameEvent;
use aerostrike_core::state::{AircraftView, CameraView, FrameSnapshot};
use aerostrike_core::types::SimTime;

use crate::camera::{ChaseCamera, OrbitControls};
use crate::fleet::Fleet;
use crate::flight::FlightDynamicsModel;
use crate::systems::{effects, projectiles};

/// Build the snapshot for the frame just simulated.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot<O: OrbitControls>(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    flight: &FlightDynamicsModel,
    camera: &ChaseCamera<O>,
    fleet: &Fleet,
    weapon_ready: bool,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        aircraft: build_aircraft(flight),
        camera: CameraView {
            mode: camera.mode(),
            position: camera.position(),
            look_at: camera.look_at(),
        },
        score: fleet.score(),
        weapon_ready,
        projectiles: projectiles::count(world),
        explosions: effects::count(world),
        events,
    }
}

fn build_aircraft(flight: &FlightDynamicsModel) -> AircraftView {
    let state = flight.state();
    AircraftView {
        position: state.position,
        orientation: state.orientation,
        speed: state.speed,
        pitch: state.pitch,
        roll: state.roll,
        yaw: state.yaw,
    }
}
