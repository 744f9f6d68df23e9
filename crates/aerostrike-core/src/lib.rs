//! Core types and definitions for the AEROSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, control input, scene-graph capability, state snapshots,
//! events, and constants. It has no dependency on any renderer or runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod scene;
pub mod state;
pub mod types;
