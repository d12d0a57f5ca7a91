//! Submission-level failures.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Structural defects that abort a whole submission.
///
/// Per-judgment and per-group defects never surface here; they are absorbed
/// while building the affected group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("submission is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("submission must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("submission has no 'comparisons' block")]
    MissingComparisons,

    #[error("'comparisons' must be an object keyed by group name, got {found}")]
    InvalidComparisons { found: &'static str },
}

impl From<serde_json::Error> for EvaluationError {
    fn from(err: serde_json::Error) -> Self {
        EvaluationError::InvalidJson(err.to_string())
    }
}

impl From<EvaluationError> for DomainError {
    fn from(err: EvaluationError) -> Self {
        DomainError::new(ErrorCode::MalformedSubmission, err.to_string())
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
