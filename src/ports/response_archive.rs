//! ResponseArchive port - Storage of raw submissions as received.
//!
//! Raw payloads are kept before evaluation so a submission can be
//! re-evaluated later, even one that failed to parse.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SubmissionId, Timestamp};

/// A raw submission together with its receipt data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedResponse {
    pub submission_id: SubmissionId,
    pub received_at: Timestamp,
    /// Payload exactly as received.
    pub payload: String,
}

impl ArchivedResponse {
    /// Wraps a payload received now under a fresh identifier.
    pub fn received_now(payload: impl Into<String>) -> Self {
        Self {
            submission_id: SubmissionId::new(),
            received_at: Timestamp::now(),
            payload: payload.into(),
        }
    }
}

/// Port for persisting raw submissions.
#[async_trait]
pub trait ResponseArchive: Send + Sync {
    /// Stores a raw submission.
    async fn archive(&self, response: &ArchivedResponse) -> Result<(), DomainError>;

    /// Fetches a stored submission by ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &SubmissionId) -> Result<Option<ArchivedResponse>, DomainError>;
}
