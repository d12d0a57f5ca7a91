//! Consistency Evaluator - Eigenvalue estimate, consistency index and ratio.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, PriorityVector};

/// Conventional acceptability threshold: a matrix is consistent if CR < 0.1.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Saaty's Random Index, indexed by matrix order (index 0 is unused).
pub const RANDOM_INDEX: [f64; 17] = [
    0.0, // unused
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59, 1.60,
];

/// Random Index used for orders beyond the table.
pub const RANDOM_INDEX_FALLBACK: f64 = 1.5;

/// Looks up the Random Index for a matrix of order `n`.
pub fn random_index(n: usize) -> f64 {
    RANDOM_INDEX.get(n).copied().unwrap_or(RANDOM_INDEX_FALLBACK)
}

/// Consistency figures for one matrix at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    pub consistent: bool,
}

impl ConsistencyResult {
    /// Derives CI, CR and the verdict from an eigenvalue estimate.
    ///
    /// # Edge Cases
    /// - n = 1: CI = 0
    /// - RI(n) = 0 (n <= 2): CR = 0
    /// - Non-finite lambda_max: CI and CR carry it through, never consistent
    pub fn from_lambda_max(lambda_max: f64, n: usize, threshold: f64) -> Self {
        let ci = if n > 1 {
            let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
            // lambda_max >= n for any positive reciprocal matrix; clamp rounding noise only.
            if ci.is_finite() {
                ci.max(0.0)
            } else {
                ci
            }
        } else {
            0.0
        };

        let ri = random_index(n);
        let cr = if ri == 0.0 { 0.0 } else { ci / ri };

        Self {
            lambda_max,
            ci,
            cr,
            consistent: cr < threshold,
        }
    }
}

/// Consistency checks for comparison matrices.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Evaluates a matrix against its priority vector with the standard threshold.
    pub fn evaluate(matrix: &ComparisonMatrix, weights: &PriorityVector) -> ConsistencyResult {
        Self::evaluate_with_threshold(matrix, weights, CONSISTENCY_THRESHOLD)
    }

    /// Evaluates a matrix against its priority vector.
    pub fn evaluate_with_threshold(
        matrix: &ComparisonMatrix,
        weights: &PriorityVector,
        threshold: f64,
    ) -> ConsistencyResult {
        let lambda_max = Self::estimate_lambda_max(matrix, weights);
        ConsistencyResult::from_lambda_max(lambda_max, matrix.order(), threshold)
    }

    /// Estimates the principal eigenvalue as `mean_i((A·w)_i / w_i)`.
    pub fn estimate_lambda_max(matrix: &ComparisonMatrix, weights: &PriorityVector) -> f64 {
        let w = weights.as_slice();
        debug_assert_eq!(w.len(), matrix.order(), "weight vector does not match matrix");

        let total: f64 = matrix
            .rows()
            .zip(w)
            .map(|(row, wi)| {
                debug_assert!(*wi > 0.0, "zero weight");
                let aw: f64 = row.iter().zip(w).map(|(a, wj)| a * wj).sum();
                aw / wi
            })
            .sum();

        total / matrix.order() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{JudgmentSet, WeightSolver};
    use crate::domain::foundation::ItemId;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    fn evaluate(judgments: &[(&str, &str, f64)]) -> ConsistencyResult {
        let mut set = JudgmentSet::new();
        for (left, right, ratio) in judgments {
            set.record(id(left), id(right), Some(*ratio)).unwrap();
        }
        let matrix = ComparisonMatrix::from_judgments(&set).unwrap();
        let weights = WeightSolver::solve(&matrix);
        ConsistencyEvaluator::evaluate(&matrix, &weights)
    }

    #[test]
    fn random_index_table_lookup() {
        assert_eq!(random_index(1), 0.0);
        assert_eq!(random_index(2), 0.0);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(4), 0.90);
        assert_eq!(random_index(12), 1.48);
        assert_eq!(random_index(16), 1.60);
    }

    #[test]
    fn random_index_falls_back_beyond_table() {
        assert_eq!(random_index(17), RANDOM_INDEX_FALLBACK);
        assert_eq!(random_index(40), 1.5);
    }

    #[test]
    fn single_item_is_trivially_consistent() {
        let matrix = ComparisonMatrix::from_weights(vec![id("A")], &[1.0]).unwrap();
        let weights = WeightSolver::solve(&matrix);
        let result = ConsistencyEvaluator::evaluate(&matrix, &weights);

        assert_eq!(result.lambda_max, 1.0);
        assert_eq!(result.ci, 0.0);
        assert_eq!(result.cr, 0.0);
        assert!(result.consistent);
    }

    #[test]
    fn two_items_always_have_zero_cr() {
        let result = evaluate(&[("A", "B", 3.0)]);
        assert_eq!(result.cr, 0.0);
        assert!(result.consistent);
    }

    #[test]
    fn perfectly_consistent_matrix_has_lambda_equal_to_n() {
        let result = evaluate(&[("A", "B", 2.0), ("A", "C", 4.0), ("B", "C", 2.0)]);

        assert!((result.lambda_max - 3.0).abs() < 1e-9);
        assert!(result.ci.abs() < 1e-9);
        assert!(result.cr.abs() < 1e-9);
        assert!(result.consistent);
    }

    #[test]
    fn from_lambda_max_matches_worked_example() {
        let result = ConsistencyResult::from_lambda_max(4.2, 4, CONSISTENCY_THRESHOLD);

        assert!((result.ci - 0.2 / 3.0).abs() < 1e-12);
        assert!((result.cr - (0.2 / 3.0) / 0.90).abs() < 1e-12);
        assert!(result.consistent);
    }

    #[test]
    fn from_lambda_max_flags_inconsistency() {
        let result = ConsistencyResult::from_lambda_max(3.5, 3, CONSISTENCY_THRESHOLD);
        // CI = 0.25, CR = 0.431
        assert!(!result.consistent);
    }

    #[test]
    fn cycle_of_preferences_is_inconsistent() {
        let result = evaluate(&[("A", "B", 5.0), ("B", "C", 5.0), ("C", "A", 5.0)]);

        assert!(result.lambda_max > 3.0);
        assert!(result.cr > CONSISTENCY_THRESHOLD);
        assert!(!result.consistent);
    }

    #[test]
    fn ci_never_negative_from_rounding_noise() {
        let result = ConsistencyResult::from_lambda_max(3.0 - 1e-15, 3, CONSISTENCY_THRESHOLD);
        assert_eq!(result.ci, 0.0);
        assert_eq!(result.cr, 0.0);
    }

    #[test]
    fn nan_lambda_is_not_reported_consistent() {
        let result = ConsistencyResult::from_lambda_max(f64::NAN, 3, CONSISTENCY_THRESHOLD);
        assert!(result.ci.is_nan());
        assert!(result.cr.is_nan());
        assert!(!result.consistent);
    }

    #[test]
    fn extreme_ratios_keep_figures_finite() {
        let result = evaluate(&[("A", "B", 1e100), ("B", "C", 1e100), ("C", "A", 1e100)]);

        assert!(result.lambda_max.is_finite());
        assert!(result.cr.is_finite());
        assert!(!result.consistent);
    }

    #[test]
    fn custom_threshold_changes_verdict() {
        let result = ConsistencyResult::from_lambda_max(4.2, 4, 0.05);
        assert!(!result.consistent);
    }
}
