//! Weight Solver - Geometric-mean priority vector.

use serde::Serialize;

use super::ComparisonMatrix;

/// Normalized priorities aligned with the matrix item order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all weights (1 up to rounding error).
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Derives priorities with the row geometric-mean method.
pub struct WeightSolver;

impl WeightSolver {
    /// Computes the priority vector of a comparison matrix.
    ///
    /// # Algorithm
    /// `g_i = (Π_j a_ij)^(1/n)`, then `w_i = g_i / Σ g`.
    ///
    /// The product is taken in log space and shifted by the largest row
    /// mean before exponentiating, so the normalizing total is at least 1.
    pub fn solve(matrix: &ComparisonMatrix) -> PriorityVector {
        let n = matrix.order() as f64;

        let log_means: Vec<f64> = matrix
            .rows()
            .map(|row| row.iter().map(|a| a.ln()).sum::<f64>() / n)
            .collect();
        let peak = log_means.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let scaled: Vec<f64> = log_means.iter().map(|l| (l - peak).exp()).collect();
        let total: f64 = scaled.iter().sum();
        debug_assert!(total >= 1.0 && total.is_finite(), "degenerate geometric means");

        let weights: Vec<f64> = scaled.iter().map(|g| g / total).collect();
        debug_assert!(weights.iter().all(|w| *w > 0.0), "non-positive weight");

        PriorityVector(weights)
    }
}
