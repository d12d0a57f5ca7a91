//! Section Evaluator - Weights and consistency for one named group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{
    ComparisonMatrix, ConsistencyEvaluator, JudgmentSet, WeightSolver, CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::{GroupName, ItemId};

/// Number of decimal places used for reported figures.
pub const DEFAULT_DECIMAL_PLACES: u32 = 4;

/// Knobs applied when packaging results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    /// A group is consistent when its CR is strictly below this value.
    pub consistency_threshold: f64,
    /// Decimal places for weights, lambdaMax, CI and CR.
    pub decimal_places: u32,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl EvaluationSettings {
    /// Rounds a value to the configured number of decimal places.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimal_places)
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    // Normalise -0.0 so serialized output never shows a signed zero.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Reported outcome for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Matrix order (number of distinct items).
    pub n: usize,
    /// Rounded weight per item.
    pub weights: BTreeMap<ItemId, f64>,
    #[serde(rename = "lambdaMax")]
    pub lambda_max: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "CR")]
    pub cr: f64,
    pub consistent: bool,
}

impl SectionResult {
    /// Rounded weight of an item, if it belongs to the group.
    pub fn weight(&self, item: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(id, _)| id.as_str() == item)
            .map(|(_, w)| *w)
    }
}

/// Runs matrix building, weight solving and consistency checking for a group.
pub struct SectionEvaluator;

impl SectionEvaluator {
    /// Evaluates one group.
    ///
    /// Returns `None` when the group has no judgments; the caller omits it.
    pub fn evaluate(
        group: &GroupName,
        judgments: &JudgmentSet,
        settings: &EvaluationSettings,
    ) -> Option<SectionResult> {
        let matrix = ComparisonMatrix::from_judgments(judgments)?;
        let weights = WeightSolver::solve(&matrix);
        let consistency = ConsistencyEvaluator::evaluate_with_threshold(
            &matrix,
            &weights,
            settings.consistency_threshold,
        );

        debug!(
            group = %group,
            n = matrix.order(),
            judgments = judgments.judgment_count(),
            discarded = judgments.discarded_count(),
            lambda_max = consistency.lambda_max,
            cr = consistency.cr,
            consistent = consistency.consistent,
            "Evaluated group"
        );

        let weights = matrix
            .items()
            .iter()
            .cloned()
            .zip(weights.as_slice().iter().map(|w| settings.round(*w)))
            .collect();

        Some(SectionResult {
            n: matrix.order(),
            weights,
            lambda_max: settings.round(consistency.lambda_max),
            ci: settings.round(consistency.ci),
            cr: settings.round(consistency.cr),
            consistent: consistency.consistent,
        })
    }
}
