//! Configuration error types

use thiserror::Error;

use crate::domain::foundation;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Decimal places must be at most {max}, got {actual}")]
    TooManyDecimalPlaces { max: u32, actual: u32 },

    #[error("Invalid group list: {0}")]
    InvalidGroups(#[from] foundation::ValidationError),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
