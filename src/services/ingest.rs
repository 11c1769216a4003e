use thiserror::Error;
use tracing::{info, warn};

use crate::clients::github::GitHubClient;
use crate::db::Store;
use crate::models::record::SearchRecord;
use crate::models::repository::RepositorySummary;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Keyword is required")]
    InvalidKeyword,

    #[error("GitHub search failed: {0}")]
    Provider(String),

    /// The provider call succeeded but the record could not be persisted;
    /// the search's data is not durable.
    #[error("Failed to store search record: {0}")]
    Store(String),
}

/// Orchestrates one search: keyword precondition, a single provider call,
/// normalization, and one atomic record insert. No retries; a failed
/// invocation persists nothing.
#[derive(Clone)]
pub struct IngestService {
    store: Store,
    github: GitHubClient,
    per_search_limit: u32,
}

impl IngestService {
    #[must_use]
    pub const fn new(store: Store, github: GitHubClient, per_search_limit: u32) -> Self {
        Self {
            store,
            github,
            per_search_limit,
        }
    }

    pub async fn ingest(&self, keyword: &str) -> Result<SearchRecord, IngestError> {
        if keyword.trim().is_empty() {
            return Err(IngestError::InvalidKeyword);
        }

        let raw = self
            .github
            .search_repositories(keyword, self.per_search_limit)
            .await
            .map_err(|e| {
                warn!("GitHub search for {keyword:?} failed: {e}");
                IngestError::Provider(e.to_string())
            })?;

        let results: Vec<RepositorySummary> = raw
            .into_iter()
            .map(RepositorySummary::from_raw)
            .collect();

        let record = self
            .store
            .create_search_record(keyword, &results)
            .await
            .map_err(|e| IngestError::Store(e.to_string()))?;

        info!(
            "Stored search #{} for {:?} ({} results)",
            record.id,
            keyword,
            record.results.len()
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_keyword_rejected_before_any_side_effect() {
        // Client pointed at an unroutable address: reaching it would fail
        // the test with Provider, not InvalidKeyword.
        let store = Store::new("sqlite::memory:").await.unwrap();
        let github = GitHubClient::with_shared_client(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            None,
        );
        let service = IngestService::new(store.clone(), github, 10);

        for keyword in ["", "   ", "\t\n"] {
            let err = service.ingest(keyword).await.unwrap_err();
            assert!(matches!(err, IngestError::InvalidKeyword));
        }

        assert_eq!(store.count_search_records().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_persists_nothing() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let github = GitHubClient::with_shared_client(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            None,
        );
        let service = IngestService::new(store.clone(), github, 10);

        let err = service.ingest("rust").await.unwrap_err();
        assert!(matches!(err, IngestError::Provider(_)));
        assert_eq!(store.count_search_records().await.unwrap(), 0);
    }
}
