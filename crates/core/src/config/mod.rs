//! Configuration module for atom evaluation
//!
//! Configuration can be loaded from TOML files and/or environment variables.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use crate::metric::ContinuousMetric;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.atomeval/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".atomeval").join("config.toml"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Comparison settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings applied to every comparison pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Cutoff at or above which a truth value counts as positive
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Per-atom continuous error contribution
    #[serde(default = "default_metric")]
    pub metric: ContinuousMetric,

    /// Predicates to compare; empty means all predicted predicates
    #[serde(default = "default_predicates")]
    pub predicates: Vec<String>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            metric: default_metric(),
            predicates: default_predicates(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for the crate's targets: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let threshold = self.evaluation.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::config(format!(
                "evaluation.threshold must be in [0, 1], got {threshold}"
            )));
        }

        if self
            .evaluation
            .predicates
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(Error::config(
                "evaluation.predicates must not contain empty names".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!(
                "Invalid logging level '{}'. Must be one of: {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
