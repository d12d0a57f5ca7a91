//! ResultWriter port - Destination for computed weights.
//!
//! Adapters receive the structured result and choose their own layout;
//! row-oriented stores can flatten it with `SubmissionResult::to_rows`.

use async_trait::async_trait;

use crate::domain::ahp::SubmissionResult;
use crate::domain::foundation::{DomainError, SubmissionId};

/// Port for persisting evaluated submissions.
///
/// Implementations must treat a write as a unit: either every row of the
/// submission is stored or none is.
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// Stores the result of one submission.
    async fn write(
        &self,
        submission_id: &SubmissionId,
        result: &SubmissionResult,
    ) -> Result<(), DomainError>;
}
