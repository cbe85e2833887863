//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;
use tracing::debug;

use super::defaults::*;
use super::{global_config_path, Config};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `ATOMEVAL_` and use double underscores
    /// for nested values. For example:
    /// - `ATOMEVAL_EVALUATION__THRESHOLD=0.7`
    /// - `ATOMEVAL_EVALUATION__PREDICATES=Friends,Knows`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        let builder = set_config_default(builder, "evaluation.threshold", default_threshold())?;
        let builder =
            set_config_default(builder, "evaluation.metric", default_metric().to_string())?;
        let builder = set_config_default(builder, "logging.level", default_log_level())?;
        let mut builder = set_config_default(
            builder,
            "evaluation.predicates",
            Vec::<config::Value>::new(),
        )?;

        // Add the config file if it exists
        if path.exists() {
            builder = builder.add_source(File::from(path));
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix("ATOMEVAL")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("evaluation.predicates")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.atomeval/config.toml or custom --config path)
    /// 3. Environment variables (ATOMEVAL_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
