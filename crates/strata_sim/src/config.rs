//! # Simulation Configuration
//!
//! Tunables are loaded once at startup from an external TOML file; every
//! field has a default so partial files (and no file at all) work.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Tunables for the headless runner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
    /// Fixed timestep, seconds.
    pub timestep: f32,
    /// Ticks the runner executes before exiting.
    pub ticks: u32,
    /// Falling bodies scattered at startup.
    pub bodies: u32,
    /// Seed for body placement.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            timestep: 1.0 / 60.0,
            ticks: 600,
            bodies: 16,
            seed: 0x5EED,
        }
    }
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path handed to [`SimConfig::load`].
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file was not valid TOML for [`SimConfig`].
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path handed to [`SimConfig::load`].
        path: String,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
}

impl SimConfig {
    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a valid [`SimConfig`] document.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
