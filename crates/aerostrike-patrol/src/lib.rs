//! Patrol kinematics for AEROSTRIKE aerial targets.
//!
//! Parametric path evaluation, shortest-path heading smoothing, and the
//! per-frame controller that applies them to a fleet. No ECS dependency;
//! operates on plain `AerialTarget` records.

pub mod controller;
pub mod heading;
pub mod paths;

pub use aerostrike_core as core;
pub use controller::PatrolMotionController;

#[cfg(test)]
mod tests;
