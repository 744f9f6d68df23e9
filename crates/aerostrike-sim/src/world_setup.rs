//! Spawn factories for setting up a mission.
//!
//! Creates the target fleet and its scene nodes from the configured bands.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aerostrike_core::components::{AerialTarget, HoverParams, PatrolPath};
use aerostrike_core::enums::NodeKind;
use aerostrike_core::scene::SceneGraph;

use crate::config::FleetConfig;
use crate::fleet::Fleet;

/// Spawn the whole fleet. Deterministic for a given RNG state.
pub fn spawn_fleet(scene: &mut impl SceneGraph, rng: &mut ChaCha8Rng, config: &FleetConfig) -> Fleet {
    let targets = (0..config.target_count)
        .map(|i| {
            let figure_eight = is_figure_eight(i, config.figure_eight_share);
            spawn_target(scene, rng, config, figure_eight)
        })
        .collect();
    Fleet::new(targets)
}

/// Spread figure-eight paths evenly through the fleet instead of bunching
/// them at one end.
fn is_figure_eight(index: u32, share: f32) -> bool {
    let before = (index as f32 * share).floor();
    let after = ((index + 1) as f32 * share).floor();
    after > before
}

/// Spawn a single target and its scene node.
pub fn spawn_target(
    scene: &mut impl SceneGraph,
    rng: &mut ChaCha8Rng,
    config: &FleetConfig,
    figure_eight: bool,
) -> AerialTarget {
    // Uniform over the spawn disc.
    let bearing: f32 = rng.gen_range(0.0..TAU);
    let range = config.spawn_radius * rng.gen::<f32>().sqrt();
    let altitude = sample(rng, config.altitude);
    let center = Vec3::new(range * bearing.sin(), altitude, range * bearing.cos());

    let radius = sample(rng, config.path_radius);
    let path = if figure_eight {
        PatrolPath::FigureEight {
            radius_x: radius,
            radius_z: radius * rng.gen_range(0.5..1.0),
        }
    } else {
        PatrolPath::Circular { radius }
    };

    let hover = HoverParams {
        baseline_y: altitude,
        amplitude: sample(rng, config.hover_amplitude),
        frequency: sample(rng, config.hover_frequency),
        phase_offset: rng.gen_range(0.0..TAU),
    };

    let node = scene.create_node(NodeKind::Target);
    let target = AerialTarget::new(
        node,
        center,
        path,
        rng.gen_range(0.0..TAU),
        sample(rng, config.angular_speed),
        hover,
    )
    .with_spin(sample(rng, config.spin_rate));

    scene.set_position(node, target.position);
    scene.set_visible(node, true);
    target
}

fn sample(rng: &mut ChaCha8Rng, [min, max]: [f32; 2]) -> f32 {
    rng.gen_range(min..max)
}
