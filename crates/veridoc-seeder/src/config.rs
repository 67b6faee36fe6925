//! Configuration loading and typed config structures for the seeder.
//!
//! The canonical configuration lives in `veridoc-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates
//! the file.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A configured value is outside its valid range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level seeder configuration.
///
/// Mirrors the structure of `veridoc-config.yaml`. All fields have
/// defaults, so a missing file or empty document is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeederConfig {
    /// Store connection settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Sample data parameters.
    #[serde(default)]
    pub seed: SeedConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SeederConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `REDIS_URL` environment variable overrides `store.redis_url`,
    /// so deployments can set the connection string without modifying
    /// the YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML,
    /// or [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.store.apply_env_overrides();
        config.seed.validate()?;
        Ok(config)
    }
}

/// Store connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Redis-compatible store URL.
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

impl StoreConfig {
    /// Override the store URL with the `REDIS_URL` env var when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("REDIS_URL") {
            self.redis_url = val;
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
        }
    }
}

/// Sample data parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Smallest sample amount in cents (inclusive).
    #[serde(default = "default_min_amount")]
    pub min_amount: i64,

    /// Largest sample amount in cents (inclusive).
    #[serde(default = "default_max_amount")]
    pub max_amount: i64,
}

impl SeedConfig {
    /// Check that the amount range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `min_amount > max_amount`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_amount > self.max_amount {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "seed.min_amount ({}) exceeds seed.max_amount ({})",
                    self.min_amount, self.max_amount
                ),
            });
        }
        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            min_amount: default_min_amount(),
            max_amount: default_max_amount(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
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

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_redis_url() -> String {
    "redis://localhost:6379".to_owned()
}

const fn default_min_amount() -> i64 {
    100
}

const fn default_max_amount() -> i64 {
    1000
}

fn default_log_level() -> String {
    "info".to_owned()
}
