//! Judgment Set - Canonical form of one group's sparse pairwise judgments.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::domain::foundation::ItemId;

/// Largest accepted ratio; its reciprocal is the smallest.
///
/// Keeps every matrix cell, geometric mean and eigenvalue term finite and
/// every weight strictly positive for any group size that fits in memory.
pub const RATIO_LIMIT: f64 = 1e100;

/// A single pairwise judgment: `left` is `ratio` times as important as `right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub left: ItemId,
    pub right: ItemId,
    pub ratio: f64,
}

impl Judgment {
    /// Creates a new judgment.
    pub fn new(left: ItemId, right: ItemId, ratio: f64) -> Self {
        Self { left, right, ratio }
    }
}

/// Why a judgment was dropped while building a set.
///
/// None of these are fatal; the affected cell falls back to the neutral fill.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscardReason {
    #[error("no ratio supplied")]
    MissingRatio,

    #[error("ratio must lie within [1e-100, 1e100], got {0}")]
    InvalidRatio(f64),

    #[error("item '{0}' compared with itself")]
    SelfComparison(ItemId),
}

/// Canonical, de-duplicated judgments for one group.
///
/// Every identifier named by a recorded judgment is an item of the set,
/// including identifiers whose judgment was discarded. Pairs are stored
/// under the ascending `(low, high)` key with the ratio expressed as
/// "low over high"; a later judgment for the same unordered pair replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgmentSet {
    items: BTreeSet<ItemId>,
    ratios: BTreeMap<(ItemId, ItemId), f64>,
    discarded: usize,
}

impl JudgmentSet {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one judgment in submission order.
    ///
    /// Both identifiers join the item set even when the ratio is rejected.
    pub fn record(
        &mut self,
        left: ItemId,
        right: ItemId,
        ratio: Option<f64>,
    ) -> Result<(), DiscardReason> {
        self.items.insert(left.clone());
        self.items.insert(right.clone());

        let outcome = Self::validate(&left, &right, ratio);
        match outcome {
            Ok(ratio) => {
                if left < right {
                    self.ratios.insert((left, right), ratio);
                } else {
                    self.ratios.insert((right, left), 1.0 / ratio);
                }
                Ok(())
            }
            Err(reason) => {
                self.discarded += 1;
                Err(reason)
            }
        }
    }

    fn validate(left: &ItemId, right: &ItemId, ratio: Option<f64>) -> Result<f64, DiscardReason> {
        let ratio = ratio.ok_or(DiscardReason::MissingRatio)?;
        // NaN fails both comparisons.
        if !(ratio >= RATIO_LIMIT.recip() && ratio <= RATIO_LIMIT) {
            return Err(DiscardReason::InvalidRatio(ratio));
        }
        if left == right {
            return Err(DiscardReason::SelfComparison(left.clone()));
        }
        Ok(ratio)
    }

    /// Items in ascending identifier order.
    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Number of distinct items referenced.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no judgment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Accepted judgments in canonical `(low, high)` form.
    pub fn judgments(&self) -> impl Iterator<Item = Judgment> + '_ {
        self.ratios
            .iter()
            .map(|((low, high), ratio)| Judgment::new(low.clone(), high.clone(), *ratio))
    }

    /// Number of accepted (distinct-pair) judgments.
    pub fn judgment_count(&self) -> usize {
        self.ratios.len()
    }

    /// Number of judgments dropped as invalid.
    pub fn discarded_count(&self) -> usize {
        self.discarded
    }

    /// Looks up the stated ratio of `a` over `b`, in either direction.
    pub fn ratio(&self, a: &ItemId, b: &ItemId) -> Option<f64> {
        if a < b {
            self.ratios.get(&(a.clone(), b.clone())).copied()
        } else {
            self.ratios.get(&(b.clone(), a.clone())).map(|r| 1.0 / r)
        }
    }
}
