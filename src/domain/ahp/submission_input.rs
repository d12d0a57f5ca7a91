//! Submission input - Lenient decoding of the `{ meta, comparisons }` payload.
//!
//! Only structural defects of the submission as a whole are errors. Inside
//! `comparisons`, a group that is not a list is kept as malformed and a
//! record that cannot be read is dropped, so one bad answer never sinks the
//! rest of the respondent's data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::errors::json_kind;
use super::{EvaluationError, JudgmentSet};
use crate::domain::foundation::ItemId;

/// One judgment record as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    pub left: String,
    pub right: String,
    /// `None` when the ratio is null, missing, or not numeric.
    #[serde(default, deserialize_with = "lenient_ratio")]
    pub ahp_ratio_aij: Option<f64>,
}

impl JudgmentRecord {
    /// Creates a record.
    pub fn new(left: impl Into<String>, right: impl Into<String>, ratio: Option<f64>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            ahp_ratio_aij: ratio,
        }
    }
}

/// Accepts JSON numbers and numeric strings; everything else means "no ratio".
fn lenient_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Decoded content of one group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupInput {
    /// Readable records in submission order, plus how many were unreadable.
    Records {
        records: Vec<JudgmentRecord>,
        unreadable: usize,
    },
    /// The group's value was not a list.
    Malformed { found: &'static str },
}

impl GroupInput {
    fn from_value(group: &str, value: Value) -> Self {
        let elements = match value {
            Value::Array(elements) => elements,
            other => {
                return GroupInput::Malformed {
                    found: json_kind(&other),
                }
            }
        };

        let mut records = Vec::with_capacity(elements.len());
        let mut unreadable = 0;
        for element in elements {
            match serde_json::from_value::<JudgmentRecord>(element) {
                Ok(record) => records.push(record),
                Err(err) => {
                    unreadable += 1;
                    debug!(group = %group, error = %err, "Dropping unreadable judgment record");
                }
            }
        }

        GroupInput::Records { records, unreadable }
    }

    /// Normalizes the group's records into a judgment set.
    ///
    /// Returns `None` for a malformed group. Records with a blank
    /// identifier are dropped; rejected ratios still register their items.
    pub fn judgment_set(&self) -> Option<JudgmentSet> {
        let GroupInput::Records { records, .. } = self else {
            return None;
        };

        let mut set = JudgmentSet::new();
        for record in records {
            let (Ok(left), Ok(right)) = (
                ItemId::new(record.left.as_str()),
                ItemId::new(record.right.as_str()),
            ) else {
                debug!(left = %record.left, right = %record.right, "Dropping record with blank item id");
                continue;
            };

            if let Err(reason) = set.record(left, right, record.ahp_ratio_aij) {
                debug!(
                    left = %record.left,
                    right = %record.right,
                    reason = %reason,
                    "Discarded judgment"
                );
            }
        }
        Some(set)
    }

    /// Returns true if the group holds no records (or is malformed).
    pub fn is_empty(&self) -> bool {
        match self {
            GroupInput::Records { records, .. } => records.is_empty(),
            GroupInput::Malformed { .. } => true,
        }
    }
}

/// A respondent's submission.
///
/// `meta` is opaque respondent identity data carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    meta: Value,
    groups: BTreeMap<String, GroupInput>,
}

impl Submission {
    /// Parses a submission from JSON text.
    ///
    /// A number literal outside the f64 range fails the whole payload; the
    /// JSON reader has no value to hand to the affected judgment.
    pub fn from_json_str(payload: &str) -> Result<Self, EvaluationError> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Decodes a submission from an already-parsed JSON value.
    ///
    /// # Errors
    /// - Top level is not an object
    /// - `comparisons` is absent or null
    /// - `comparisons` is not an object
    pub fn from_value(value: Value) -> Result<Self, EvaluationError> {
        let mut root: Map<String, Value> = match value {
            Value::Object(map) => map,
            other => {
                return Err(EvaluationError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };

        let meta = root.remove("meta").unwrap_or(Value::Null);

        let comparisons = match root.remove("comparisons") {
            None | Some(Value::Null) => return Err(EvaluationError::MissingComparisons),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(EvaluationError::InvalidComparisons {
                    found: json_kind(&other),
                })
            }
        };

        let groups = comparisons
            .into_iter()
            .map(|(name, value)| {
                let input = GroupInput::from_value(&name, value);
                (name, input)
            })
            .collect();

        Ok(Self { meta, groups })
    }

    /// Creates a builder for constructing submissions in code.
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::new()
    }

    /// Opaque respondent metadata.
    pub fn meta(&self) -> &Value {
        &self.meta
    }

    /// Input for a group, if the submission mentions it.
    pub fn group(&self, name: &str) -> Option<&GroupInput> {
        self.groups.get(name)
    }

    /// All group names present in `comparisons`, sorted.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

/// Builder for constructing Submission instances.
#[derive(Debug, Default)]
pub struct SubmissionBuilder {
    meta: Value,
    groups: BTreeMap<String, Vec<JudgmentRecord>>,
}

impl SubmissionBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the respondent metadata.
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }

    /// Adds a judgment to a group.
    pub fn judgment(
        mut self,
        group: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        ratio: Option<f64>,
    ) -> Self {
        self.groups
            .entry(group.into())
            .or_default()
            .push(JudgmentRecord::new(left, right, ratio));
        self
    }

    /// Declares a group with no judgments.
    pub fn empty_group(mut self, group: impl Into<String>) -> Self {
        self.groups.entry(group.into()).or_default();
        self
    }

    /// Builds the submission.
    pub fn build(self) -> Submission {
        Submission {
            meta: self.meta,
            groups: self
                .groups
                .into_iter()
                .map(|(name, records)| (name, GroupInput::Records { records, unreadable: 0 }))
                .collect(),
        }
    }
}
