//! Configuration for MatchForge.
//!
//! Controls how failure messages are rendered and which log directive the
//! console subscriber starts with, without code changes.
//!
//! # Examples
//!
//! ```
//! use matchforge_config::MatchConfig;
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     max_line_length = 80
//!     max_items = 5
//!     log_filter = "matchforge=debug"
//! "#).unwrap();
//!
//! assert_eq!(config.max_items, 5);
//! assert_eq!(config.writer_settings().max_line_length, 80);
//! ```
//!
//! Use the defaults when the file is missing:
//!
//! ```
//! use matchforge_config::MatchConfig;
//!
//! let config = MatchConfig::load("matchforge.toml").unwrap_or_default();
//! assert_eq!(config.max_items, 10);
//! ```

use std::path::Path;

use matchforge_constraints::WriterSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_MAX_LINE_LENGTH: usize = 100;
const DEFAULT_MAX_ITEMS: usize = 10;
const DEFAULT_LOG_FILTER: &str = "matchforge=info";

/// Main MatchForge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchConfig {
    /// Rendered values longer than this are clipped.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Sequence items shown before `...`.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// `EnvFilter` directive used by `console::init`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_items: DEFAULT_MAX_ITEMS,
            log_filter: default_log_filter(),
        }
    }
}

impl MatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the clipping width.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Sets how many sequence items are shown.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Sets the log filter directive.
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::Invalid(
                "max_line_length must be greater than zero".to_string(),
            ));
        }
        if self.max_items == 0 {
            return Err(ConfigError::Invalid(
                "max_items must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Writer limits taken from this configuration.
    pub fn writer_settings(&self) -> WriterSettings {
        WriterSettings {
            max_line_length: self.max_line_length,
            max_items: self.max_items,
        }
    }
}
