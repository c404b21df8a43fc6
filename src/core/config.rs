//! Configuration management for the routeatlas CLI
//!
//! Settings load in three steps: a `routeatlas.toml` file when present,
//! then `RA_*` environment overrides, then validation.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Atlas selection
    pub atlas: AtlasConfig,

    /// Search behavior
    pub search: SearchConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Atlas selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Path to a TOML atlas file (None = built-in world cities)
    pub file: Option<PathBuf>,
}

/// Search behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop the search as soon as the destination settles
    pub early_exit: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact)
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            atlas: AtlasConfig::default(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { file: None }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `routeatlas.toml` and environment variables
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(file_config) = Self::from_file("routeatlas.toml") {
            config = file_config;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        use std::env;

        if let Ok(file) = env::var("RA_ATLAS_FILE") {
            self.atlas.file = Some(PathBuf::from(file));
        }

        if let Ok(early) = env::var("RA_EARLY_EXIT") {
            if let Ok(value) = early.parse() {
                self.search.early_exit = value;
            }
        }

        if let Ok(level) = env::var("RA_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = env::var("RA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(Error::config(format!("Invalid log level: {}", other))),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" => {}
            other => return Err(Error::config(format!("Invalid log format: {}", other))),
        }

        if let Some(file) = &self.atlas.file {
            if !file.exists() {
                return Err(Error::config(format!(
                    "Atlas file not found: {}",
                    file.display()
                )));
            }
        }

        Ok(())
    }
}
