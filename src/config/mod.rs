//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_WEIGHTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_weights::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let evaluator = config.engine.evaluator().expect("Invalid engine configuration");
//! println!("Recognized groups: {}", evaluator.catalog().len());
//! ```

mod engine;
mod error;
mod logging;

pub use engine::{EngineConfig, MAX_DECIMAL_PLACES};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weighting engine configuration (groups, threshold, rounding)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_WEIGHTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `ENGINE__GROUPS` on commas
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_WEIGHTS__ENGINE__GROUPS=dimensions,technical` -> `engine.groups`
    /// - `AHP_WEIGHTS__ENGINE__CONSISTENCY_THRESHOLD=0.1` -> `engine.consistency_threshold`
    /// - `AHP_WEIGHTS__LOGGING__JSON=true` -> `logging.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_WEIGHTS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("engine.groups"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "AHP_WEIGHTS__ENGINE__GROUPS",
        "AHP_WEIGHTS__ENGINE__CONSISTENCY_THRESHOLD",
        "AHP_WEIGHTS__ENGINE__DECIMAL_PLACES",
        "AHP_WEIGHTS__LOGGING__LEVEL",
        "AHP_WEIGHTS__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.groups.len(), 5);
        assert_eq!(config.engine.decimal_places, 4);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_WEIGHTS__ENGINE__GROUPS", "dimensions,quality,cost");
        env::set_var("AHP_WEIGHTS__ENGINE__CONSISTENCY_THRESHOLD", "0.15");
        env::set_var("AHP_WEIGHTS__ENGINE__DECIMAL_PLACES", "3");
        env::set_var("AHP_WEIGHTS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.groups, vec!["dimensions", "quality", "cost"]);
        assert_eq!(config.engine.consistency_threshold, 0.15);
        assert_eq!(config.engine.decimal_places, 3);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_WEIGHTS__ENGINE__CONSISTENCY_THRESHOLD", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold(_))
        ));
    }
}
