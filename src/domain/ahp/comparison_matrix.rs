//! Comparison Matrix - Complete reciprocal matrix over a group's items.

use serde::Serialize;

use super::JudgmentSet;
use crate::domain::foundation::ItemId;

/// Square positive reciprocal matrix, row-major.
///
/// Rows and columns follow `items`, which is sorted ascending. Entry
/// `(i, j)` states how many times more important item `i` is than item `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    items: Vec<ItemId>,
    values: Vec<f64>,
}

impl ComparisonMatrix {
    /// Builds the matrix from a judgment set.
    ///
    /// Returns `None` for an empty set. Cells without an accepted judgment
    /// are filled with 1 (no stated preference).
    pub fn from_judgments(judgments: &JudgmentSet) -> Option<Self> {
        if judgments.is_empty() {
            return None;
        }

        let items: Vec<ItemId> = judgments.items().cloned().collect();
        let n = items.len();

        let mut cells: Vec<Option<f64>> = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(1.0);
        }

        for judgment in judgments.judgments() {
            // Item list is derived from the same set, so both lookups succeed.
            let (Ok(i), Ok(j)) = (
                items.binary_search(&judgment.left),
                items.binary_search(&judgment.right),
            ) else {
                continue;
            };
            cells[i * n + j] = Some(judgment.ratio);
            cells[j * n + i] = Some(1.0 / judgment.ratio);
        }

        let values = cells.into_iter().map(|cell| cell.unwrap_or(1.0)).collect();

        Some(Self { items, values })
    }

    /// Builds a perfectly consistent matrix `a_ij = w_i / w_j`.
    ///
    /// Returns `None` if the lengths differ, the input is empty, or any
    /// weight is not strictly positive.
    pub fn from_weights(items: Vec<ItemId>, weights: &[f64]) -> Option<Self> {
        if items.is_empty() || items.len() != weights.len() {
            return None;
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return None;
        }

        let mut paired: Vec<(ItemId, f64)> = items.into_iter().zip(weights.iter().copied()).collect();
        paired.sort_by(|a, b| a.0.cmp(&b.0));
        paired.dedup_by(|a, b| a.0 == b.0);
        if paired.len() != weights.len() {
            return None;
        }

        let n = paired.len();
        let mut values = Vec::with_capacity(n * n);
        for (_, wi) in &paired {
            for (_, wj) in &paired {
                values.push(wi / wj);
            }
        }
        let items = paired.into_iter().map(|(id, _)| id).collect();

        Some(Self { items, values })
    }

    /// Matrix order `n`.
    pub fn order(&self) -> usize {
        self.items.len()
    }

    /// Item identifiers in row/column order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let n = self.order();
        assert!(i < n && j < n, "matrix index ({}, {}) out of bounds for order {}", i, j, n);
        self.values[i * n + j]
    }

    /// Iterates the rows in item order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.order())
    }

    /// Position of an item in the ordering.
    pub fn index_of(&self, item: &ItemId) -> Option<usize> {
        self.items.binary_search(item).ok()
    }
}
