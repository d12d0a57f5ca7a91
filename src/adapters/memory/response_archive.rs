//! In-Memory Response Archive Adapter
//!
//! Keeps raw submissions in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::ports::{ArchivedResponse, ResponseArchive};

/// In-memory archive of raw submissions
#[derive(Debug, Clone, Default)]
pub struct InMemoryResponseArchive {
    responses: Arc<RwLock<HashMap<SubmissionId, ArchivedResponse>>>,
}

impl InMemoryResponseArchive {
    /// Create a new in-memory archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored submissions
    pub async fn len(&self) -> usize {
        self.responses.read().await.len()
    }

    /// Check whether nothing has been archived
    pub async fn is_empty(&self) -> bool {
        self.responses.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseArchive for InMemoryResponseArchive {
    async fn archive(&self, response: &ArchivedResponse) -> Result<(), DomainError> {
        let mut responses = self.responses.write().await;
        responses.insert(response.submission_id, response.clone());
        Ok(())
    }

    async fn find(&self, id: &SubmissionId) -> Result<Option<ArchivedResponse>, DomainError> {
        let responses = self.responses.read().await;
        Ok(responses.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn archive_then_find() {
        let archive = InMemoryResponseArchive::new();
        let response = ArchivedResponse::received_now(r#"{"comparisons": {}}"#);

        archive.archive(&response).await.unwrap();

        let found = archive.find(&response.submission_id).await.unwrap();
        assert_eq!(found, Some(response));
        assert_eq!(archive.len().await, 1);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let archive = InMemoryResponseArchive::new();
        let found = archive.find(&SubmissionId::new()).await.unwrap();
        assert!(found.is_none());
        assert!(archive.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let archive = InMemoryResponseArchive::new();
        let clone = archive.clone();

        clone
            .archive(&ArchivedResponse::received_now("{}"))
            .await
            .unwrap();

        assert_eq!(archive.len().await, 1);
    }
}
