//! Configuration management for the poultry weighing service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with PW_ prefix

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Weighing schedule configuration
    pub schedule: ScheduleConfig,

    /// Key-value storage configuration
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Days ahead covered by weighing reminders
    pub lookahead_days: u32,

    /// Breed assigned to batches registered without one
    pub default_breed: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Prefix for every key written to the store
    pub key_prefix: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PW_ prefix)
            .add_source(
                Environment::with_prefix("PW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("schedule.lookahead_days", i64::from(shared::DEFAULT_LOOKAHEAD_DAYS))?
            .set_default("schedule.default_breed", shared::REFERENCE_BREED)?
            .set_default("storage.key_prefix", "granja")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            schedule: ScheduleConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lookahead_days: shared::DEFAULT_LOOKAHEAD_DAYS,
            default_breed: shared::REFERENCE_BREED.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: "granja".to_string(),
        }
    }
}
