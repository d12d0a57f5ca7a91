//! EvaluateSubmissionHandler - Command handler for scoring one submission.
//!
//! Archives the raw payload, evaluates every recognized group, and hands
//! the result to the result store.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ahp::{SubmissionEvaluator, SubmissionResult};
use crate::domain::foundation::{DomainError, SubmissionId};
use crate::ports::{ArchivedResponse, ResponseArchive, ResultWriter};

/// Command to evaluate a raw JSON submission.
#[derive(Debug, Clone)]
pub struct EvaluateSubmissionCommand {
    pub payload: String,
}

impl EvaluateSubmissionCommand {
    /// Creates a command from a raw payload.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateSubmissionResult {
    pub submission_id: SubmissionId,
    pub result: SubmissionResult,
}

/// Handler for evaluating submissions.
pub struct EvaluateSubmissionHandler {
    evaluator: SubmissionEvaluator,
    archive: Arc<dyn ResponseArchive>,
    writer: Arc<dyn ResultWriter>,
}

impl EvaluateSubmissionHandler {
    pub fn new(
        evaluator: SubmissionEvaluator,
        archive: Arc<dyn ResponseArchive>,
        writer: Arc<dyn ResultWriter>,
    ) -> Self {
        Self {
            evaluator,
            archive,
            writer,
        }
    }

    pub async fn handle(
        &self,
        cmd: EvaluateSubmissionCommand,
    ) -> Result<EvaluateSubmissionResult, DomainError> {
        // 1. Keep the raw payload, even if it turns out to be malformed
        let response = ArchivedResponse::received_now(cmd.payload);
        let submission_id = response.submission_id;
        self.archive.archive(&response).await?;

        // 2. Evaluate; structural defects abort before anything is written
        let result = self
            .evaluator
            .evaluate_json(&response.payload)
            .map_err(|err| {
                warn!(submission_id = %submission_id, error = %err, "Rejected submission");
                DomainError::from(err).with_detail("submission_id", submission_id.to_string())
            })?;

        // 3. Persist computed weights
        self.writer.write(&submission_id, &result).await?;

        info!(
            submission_id = %submission_id,
            groups = result.len(),
            "Stored submission weights"
        );

        Ok(EvaluateSubmissionResult {
            submission_id,
            result,
        })
    }
}
