//! Projectile system: spawn, advance, expire, and collide rounds with targets.

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use aerostrike_core::components::{AerialTarget, Projectile};
use aerostrike_core::constants::*;
use aerostrike_core::enums::NodeKind;
use aerostrike_core::scene::SceneGraph;
use aerostrike_core::types::FORWARD;

use crate::fleet::Fleet;

/// A target brought down this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    /// Stable fleet index.
    pub target_index: usize,
    pub position: Vec3,
}

/// Fire a round from `origin` along the nose of `orientation`.
pub fn spawn(world: &mut World, scene: &mut impl SceneGraph, origin: Vec3, orientation: Quat) -> Entity {
    let node = scene.create_node(NodeKind::Projectile);
    scene.set_position(node, origin);
    scene.set_orientation(node, orientation);

    world.spawn((Projectile {
        node,
        position: origin,
        velocity: (orientation * FORWARD) * PROJECTILE_SPEED,
        age: 0.0,
        max_age: PROJECTILE_MAX_AGE,
        active: true,
    },))
}

/// Advance every projectile one frame and resolve collisions.
///
/// Each projectile resolves at most once: it either expires, hits the first
/// live target in fleet order, or keeps flying.
pub fn run(
    world: &mut World,
    scene: &mut impl SceneGraph,
    fleet: &mut Fleet,
    dt: f32,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<TargetHit> {
    despawn_buffer.clear();
    let mut hits = Vec::new();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        if !projectile.active {
            despawn_buffer.push(entity);
            continue;
        }

        projectile.age += dt;
        if projectile.age > projectile.max_age {
            // Expired in flight.
            projectile.active = false;
            despawn_buffer.push(entity);
            continue;
        }

        projectile.position += projectile.velocity * dt * PROJECTILE_TIME_SCALE;

        if let Some(index) = first_hit(fleet.targets(), projectile.position) {
            projectile.active = false;
            despawn_buffer.push(entity);
            if fleet.mark_destroyed(index) {
                let target = &fleet.targets()[index];
                scene.set_visible(target.node, false);
                hits.push(TargetHit {
                    target_index: index,
                    position: target.position,
                });
            }
            continue;
        }

        scene.set_position(projectile.node, projectile.position);
    }

    for entity in despawn_buffer.drain(..) {
        if let Ok(projectile) = world.remove_one::<Projectile>(entity) {
            scene.remove_node(projectile.node);
        }
        let _ = world.despawn(entity);
    }

    hits
}

/// Index of the first live target within collision range of `position`.
pub fn first_hit(targets: &[AerialTarget], position: Vec3) -> Option<usize> {
    let reach = PROJECTILE_RADIUS + TARGET_RADIUS;
    targets
        .iter()
        .position(|t| !t.destroyed && t.position.distance(position) < reach)
}

/// Number of projectiles in flight.
pub fn count(world: &World) -> u32 {
    world.query::<&Projectile>().iter().count() as u32
}
