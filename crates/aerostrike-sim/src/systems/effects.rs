//! Transient destruction effects: an expanding core glow plus debris.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aerostrike_core::components::{CoreGlow, Explosion, Particle};
use aerostrike_core::constants::*;
use aerostrike_core::enums::NodeKind;
use aerostrike_core::scene::SceneGraph;

/// Spawn an explosion centered on `position`.
pub fn spawn(
    world: &mut World,
    scene: &mut impl SceneGraph,
    rng: &mut ChaCha8Rng,
    position: Vec3,
) -> Entity {
    let core_node = scene.create_node(NodeKind::ExplosionCore);
    scene.set_position(core_node, position);
    scene.set_scale(core_node, EXPLOSION_CORE_INITIAL_SCALE);
    scene.set_opacity(core_node, 1.0);

    let particles = (0..EXPLOSION_PARTICLE_COUNT)
        .map(|_| {
            let direction = random_direction(rng);
            let distance = rng.gen_range(0.0..PARTICLE_MAX_INITIAL_DISTANCE);
            let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
            let scale = rng.gen_range(PARTICLE_MIN_SCALE..PARTICLE_MAX_SCALE);

            let node = scene.create_node(NodeKind::ExplosionParticle);
            let particle = Particle {
                node,
                position: position + direction * distance,
                velocity: direction * speed,
                base_scale: scale,
                scale,
                opacity: 1.0,
            };
            scene.set_position(node, particle.position);
            scene.set_scale(node, scale);
            scene.set_opacity(node, 1.0);
            particle
        })
        .collect();

    world.spawn((Explosion {
        origin: position,
        age: 0.0,
        max_age: EXPLOSION_MAX_AGE,
        core: CoreGlow {
            node: core_node,
            scale: EXPLOSION_CORE_INITIAL_SCALE,
            opacity: 1.0,
        },
        particles,
    },))
}

/// Age and animate every explosion; remove the ones past their lifetime.
pub fn run(world: &mut World, scene: &mut impl SceneGraph, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.age += dt;
        if explosion.age > explosion.max_age {
            despawn_buffer.push(entity);
            continue;
        }
        let progress = explosion.age / explosion.max_age;
        animate(explosion, progress, dt);
        publish(explosion, scene);
    }

    for entity in despawn_buffer.drain(..) {
        if let Ok(explosion) = world.remove_one::<Explosion>(entity) {
            for node in explosion.nodes() {
                scene.remove_node(node);
            }
        }
        let _ = world.despawn(entity);
    }
}

/// Apply one frame of animation at `progress` in [0, 1].
pub fn animate(explosion: &mut Explosion, progress: f32, dt: f32) {
    explosion.core.scale = EXPLOSION_CORE_INITIAL_SCALE + EXPLOSION_CORE_GROWTH * progress;
    // Not clamped: the core is gone well before the debris.
    explosion.core.opacity = 1.0 - EXPLOSION_CORE_FADE * progress;

    let shrink = 1.0 - ((progress - PARTICLE_SHRINK_START) * PARTICLE_SHRINK_RATE).max(0.0);
    for particle in &mut explosion.particles {
        particle.position += particle.velocity * dt;
        particle.velocity *= PARTICLE_FRICTION;
        particle.opacity = 1.0 - progress;
        particle.scale = particle.base_scale * shrink;
    }
}

fn publish(explosion: &Explosion, scene: &mut impl SceneGraph) {
    let core = &explosion.core;
    scene.set_scale(core.node, core.scale);
    scene.set_opacity(core.node, core.opacity);
    scene.set_visible(core.node, core.opacity > 0.0);

    for particle in &explosion.particles {
        scene.set_position(particle.node, particle.position);
        scene.set_scale(particle.node, particle.scale);
        scene.set_opacity(particle.node, particle.opacity);
    }
}

/// Uniformly distributed unit vector, by rejection sampling the unit ball.
fn random_direction(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// Number of explosions still animating.
pub fn count(world: &World) -> u32 {
    world.query::<&Explosion>().iter().count() as u32
}
