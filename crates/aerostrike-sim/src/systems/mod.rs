//! Systems that operate on the simulation each frame.
//!
//! Systems are plain functions over the world, fleet, and scene. They do
//! not own state; all state lives in components and the engine.

pub mod cleanup;
pub mod effects;
pub mod patrol;
pub mod projectiles;
pub mod snapshot;
