//! Session configuration.
//!
//! Physics tuning lives in `aerostrike_core::constants`; this covers what a
//! host may reasonably want to change per session. Every field has a
//! default, so a partial JSON document is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aerostrike_core::constants::{FIRE_COOLDOWN_SECS, MAX_FRAME_DT};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same fleet and explosions.
    pub seed: u64,
    /// Frames longer than this many seconds are discarded.
    pub max_frame_dt: f32,
    /// Delay between shots (seconds).
    pub fire_cooldown_secs: f32,
    pub fleet: FleetConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_dt: MAX_FRAME_DT,
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
            fleet: FleetConfig::default(),
        }
    }
}

/// Target fleet generation parameters. Ranges are `[min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub target_count: u32,
    /// Share of targets flying figure-eights instead of circles (0..=1).
    pub figure_eight_share: f32,
    /// Path centers are placed within this horizontal radius of the origin.
    pub spawn_radius: f32,
    pub altitude: [f32; 2],
    pub path_radius: [f32; 2],
    /// Path parameter rate (rad/s).
    pub angular_speed: [f32; 2],
    pub hover_amplitude: [f32; 2],
    pub hover_frequency: [f32; 2],
    /// Decorative spin rate (rad/s).
    pub spin_rate: [f32; 2],
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            target_count: 10,
            figure_eight_share: 0.4,
            spawn_radius: 250.0,
            altitude: [30.0, 80.0],
            path_radius: [20.0, 60.0],
            angular_speed: [0.2, 0.5],
            hover_amplitude: [1.0, 4.0],
            hover_frequency: [0.5, 1.5],
            spin_rate: [0.1, 0.4],
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        if !(self.fire_cooldown_secs.is_finite() && self.fire_cooldown_secs >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fire_cooldown_secs must be non-negative, got {}",
                self.fire_cooldown_secs
            )));
        }
        self.fleet.validate()
    }
}

impl FleetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.figure_eight_share) {
            return Err(ConfigError::Invalid(format!(
                "fleet.figure_eight_share must be within 0..=1, got {}",
                self.figure_eight_share
            )));
        }
        if !(self.spawn_radius.is_finite() && self.spawn_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fleet.spawn_radius must be non-negative, got {}",
                self.spawn_radius
            )));
        }
        check_range("fleet.altitude", self.altitude)?;
        check_range("fleet.path_radius", self.path_radius)?;
        check_range("fleet.angular_speed", self.angular_speed)?;
        check_range("fleet.hover_amplitude", self.hover_amplitude)?;
        check_range("fleet.hover_frequency", self.hover_frequency)?;
        check_range("fleet.spin_rate", self.spin_rate)?;
        if self.path_radius[0] <= 0.0 {
            return Err(ConfigError::Invalid(
                "fleet.path_radius must be positive".to_string(),
            ));
        }
        if self.angular_speed[0] <= 0.0 {
            return Err(ConfigError::Invalid(
                "fleet.angular_speed must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A `[min, max)` band must be finite and non-empty.
fn check_range(name: &str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be an increasing [min, max] pair, got [{min}, {max}]"
        )))
    }
}
