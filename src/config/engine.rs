//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{
    EvaluationSettings, GroupCatalog, SubmissionEvaluator, CONSISTENCY_THRESHOLD,
    DEFAULT_DECIMAL_PLACES, DEFAULT_GROUPS,
};

/// Largest supported rounding precision
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Weighting engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Recognized group names, in evaluation order
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,

    /// CR below this value counts as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Decimal places for reported figures
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl EngineConfig {
    /// Build the group catalog
    pub fn catalog(&self) -> Result<GroupCatalog, ValidationError> {
        Ok(GroupCatalog::new(self.groups.iter().cloned())?)
    }

    /// Packaging settings for the evaluator
    pub fn settings(&self) -> EvaluationSettings {
        EvaluationSettings {
            consistency_threshold: self.consistency_threshold,
            decimal_places: self.decimal_places,
        }
    }

    /// Build a submission evaluator from this configuration
    pub fn evaluator(&self) -> Result<SubmissionEvaluator, ValidationError> {
        self.validate()?;
        Ok(SubmissionEvaluator::new(self.catalog()?, self.settings()))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(threshold));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimalPlaces {
                max: MAX_DECIMAL_PLACES,
                actual: self.decimal_places,
            });
        }
        self.catalog()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            consistency_threshold: default_consistency_threshold(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}
