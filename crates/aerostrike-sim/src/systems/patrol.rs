//! Patrol system: moves live targets and publishes their transforms.

use aerostrike_core::scene::SceneGraph;
use aerostrike_patrol::PatrolMotionController;

use crate::fleet::Fleet;

/// Advance the fleet to `elapsed` seconds of simulation time.
pub fn run(
    controller: &PatrolMotionController,
    fleet: &mut Fleet,
    scene: &mut impl SceneGraph,
    elapsed: f64,
) {
    controller.update(fleet.targets_mut(), elapsed);

    for target in fleet.targets().iter().filter(|t| !t.destroyed) {
        scene.set_position(target.node, target.position);
        scene.set_orientation(target.node, target.orientation());
    }
}
