//! Simulation engine for AEROSTRIKE.
//!
//! Owns the flight model, camera, target fleet, and a hecs world holding
//! projectiles and explosions. Runs the per-frame systems in a fixed order
//! and produces `FrameSnapshot`s for the presentation layer.

pub mod camera;
pub mod config;
pub mod engine;
pub mod fleet;
pub mod flight;
pub mod systems;
pub mod world_setup;

pub use aerostrike_core as core;
pub use config::{ConfigError, FleetConfig, SimConfig};
pub use engine::SimulationEngine;
