//! Teardown of everything a mission put into the scene.

use hecs::World;

use aerostrike_core::components::{Explosion, Projectile};
use aerostrike_core::scene::SceneGraph;

use crate::fleet::Fleet;

/// Remove every projectile, explosion, and target node and empty the
/// containers.
pub fn teardown(world: &mut World, fleet: &mut Fleet, scene: &mut impl SceneGraph) {
    for (_entity, projectile) in world.query_mut::<&Projectile>() {
        scene.remove_node(projectile.node);
    }
    for (_entity, explosion) in world.query_mut::<&Explosion>() {
        for node in explosion.nodes() {
            scene.remove_node(node);
        }
    }
    world.clear();

    for target in fleet.clear() {
        scene.remove_node(target.node);
    }
}
