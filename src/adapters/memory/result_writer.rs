//! In-Memory Result Writer Adapter
//!
//! Stores result rows in memory, one sheet-like table shared by all
//! submissions. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::{ResultRow, SubmissionResult};
use crate::domain::foundation::{DomainError, SubmissionId};
use crate::ports::ResultWriter;

/// In-memory result table keyed by submission
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultWriter {
    rows: Arc<RwLock<HashMap<SubmissionId, Vec<ResultRow>>>>,
}

impl InMemoryResultWriter {
    /// Create a new in-memory writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows written for a submission
    pub async fn rows_for(&self, submission_id: &SubmissionId) -> Vec<ResultRow> {
        self.rows
            .read()
            .await
            .get(submission_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the number of submissions written
    pub async fn submission_count(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Get the total number of rows across all submissions
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl ResultWriter for InMemoryResultWriter {
    async fn write(
        &self,
        submission_id: &SubmissionId,
        result: &SubmissionResult,
    ) -> Result<(), DomainError> {
        let rows = result.to_rows();
        let mut table = self.rows.write().await;
        table.insert(*submission_id, rows);
        Ok(())
    }
}
