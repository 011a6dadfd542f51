//! Engine configuration file support.
//!
//! Reads the analytics configuration from a TOML file. Every key has a
//! default, so a missing file or an empty one yields a working setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::db::repository::RepositoryError;
use crate::error::EngineError;
use crate::models::PeriodSelector;

/// Engine configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Period selector preset used when the dashboard has no explicit
    /// selection (`current-month`, `last-month`, ..., `all`).
    #[serde(default = "default_period")]
    pub default_period: String,
    /// Rows kept by the equipment ranking table.
    #[serde(default = "default_top_equipment")]
    pub top_equipment: usize,
    /// Buckets kept by the problem-category aggregator.
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
}

fn default_period() -> String {
    "current-month".to_string()
}

fn default_top_equipment() -> usize {
    10
}

fn default_top_categories() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_period: default_period(),
            top_equipment: default_top_equipment(),
            top_categories: default_top_categories(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `engine.toml` in the current directory, then the parent
    /// directory. Falls back to defaults when neither exists.
    pub fn from_default_locations() -> Self {
        for candidate in ["engine.toml", "../engine.toml"] {
            if Path::new(candidate).exists() {
                match Self::from_file(candidate) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("ignoring unreadable config {}: {}", candidate, e);
                    }
                }
            }
        }
        Self::default()
    }

    /// The configured default period as a selector.
    pub fn default_selector(&self) -> Result<PeriodSelector, EngineError> {
        self.default_period.parse()
    }
}
