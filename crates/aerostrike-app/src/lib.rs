//! AEROSTRIKE headless host.
//!
//! Runs the simulation engine on its own thread against an in-memory scene,
//! feeds it scripted input, and reports the HUD through the log.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use aerostrike_core as core;
