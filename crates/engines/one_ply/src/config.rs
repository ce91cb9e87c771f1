//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! seed = 42          # omit for an entropy-seeded generator
//! jitter_range = 50  # jitter is drawn from 0..jitter_range, 0 disables it, max 1000
//! ```

use crate::error::ConfigError;
use crate::select::{DEFAULT_JITTER_RANGE, MAX_JITTER_RANGE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible play
    pub seed: Option<u64>,
    pub jitter_range: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            jitter_range: DEFAULT_JITTER_RANGE,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        check_jitter_range("jitter_range", config.jitter_range)?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Applies a UCI `setoption`. Returns Ok(false) for unknown option names.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<bool, ConfigError> {
        let invalid = || ConfigError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name.to_ascii_lowercase().as_str() {
            "seed" => {
                self.seed = match value {
                    "" | "random" | "none" => None,
                    v => Some(v.parse().map_err(|_| invalid())?),
                };
            }
            "jitter" | "jitterrange" => {
                let range = value.parse().map_err(|_| invalid())?;
                check_jitter_range(name, range)?;
                self.jitter_range = range;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn check_jitter_range(name: &str, range: u32) -> Result<(), ConfigError> {
    if range > MAX_JITTER_RANGE {
        return Err(ConfigError::InvalidOption {
            name: name.to_string(),
            value: range.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
