//! Closed parametric patrol paths.

use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use aerostrike_core::components::{HoverParams, PatrolPath};

/// Horizontal (x, z) offset from the path center at parameter `t`.
pub fn horizontal_offset(path: &PatrolPath, t: f32) -> Vec2 {
    match *path {
        PatrolPath::Circular { radius } => Vec2::new(t.cos(), t.sin()) * radius,
        PatrolPath::FigureEight { radius_x, radius_z } => {
            let (sin, cos) = t.sin_cos();
            let denom = 1.0 + sin * sin;
            Vec2::new(radius_x * cos / denom, radius_z * sin * cos / denom)
        }
    }
}

/// Altitude at `elapsed` seconds.
pub fn hover_height(hover: &HoverParams, elapsed: f64) -> f32 {
    let angle = (elapsed * hover.frequency as f64 + hover.phase_offset as f64).rem_euclid(TAU);
    hover.baseline_y + hover.amplitude * (angle as f32).sin()
}

/// World position on the path at parameter `t` and time `elapsed`.
pub fn position_at(center: Vec3, path: &PatrolPath, hover: &HoverParams, t: f32, elapsed: f64) -> Vec3 {
    let offset = horizontal_offset(path, t);
    Vec3::new(center.x + offset.x, hover_height(hover, elapsed), center.z + offset.y)
}
