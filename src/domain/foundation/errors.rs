//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing identifiers and catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// Error codes surfaced by the engine and its adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyField,

    // Submission errors
    MalformedSubmission,

    // Infrastructure errors
    InputUnavailable,
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::MalformedSubmission => "MALFORMED_SUBMISSION",
            ErrorCode::InputUnavailable => "INPUT_UNAVAILABLE",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Domain error with a code, a message, and string details for logs.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// A submission payload could not be read.
    pub fn input_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InputUnavailable, message)
    }

    /// An archive or result store failed to persist.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::EmptyField { field } => {
                DomainError::new(ErrorCode::EmptyField, err.to_string())
                    .with_detail("field", field.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_the_field() {
        let err = ValidationError::empty_field("item_id");
        assert_eq!(err.to_string(), "Field 'item_id' cannot be empty");
    }

    #[test]
    fn displays_code_and_message() {
        let err = DomainError::new(ErrorCode::MalformedSubmission, "comparisons missing");
        assert_eq!(err.to_string(), "[MALFORMED_SUBMISSION] comparisons missing");

        let err = DomainError::input_unavailable("stdin closed");
        assert_eq!(err.to_string(), "[INPUT_UNAVAILABLE] stdin closed");
    }

    #[test]
    fn details_accumulate() {
        let err = DomainError::storage("write failed")
            .with_detail("submission_id", "abc")
            .with_detail("group", "economic");

        assert_eq!(err.details.len(), 2);
        assert_eq!(err.details.get("group").map(String::as_str), Some("economic"));
    }

    #[test]
    fn validation_error_keeps_field_detail() {
        let err: DomainError = ValidationError::empty_field("group_name").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field").map(String::as_str), Some("group_name"));
    }
}
