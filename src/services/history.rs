use thiserror::Error;

use crate::db::Store;
use crate::models::record::SearchRecord;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to read search history: {0}")]
    Store(String),
}

#[derive(Debug)]
pub struct HistoryPage {
    pub results: Vec<SearchRecord>,
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// Stateless paginated reads over the stored search history, newest first.
#[derive(Clone)]
pub struct HistoryService {
    store: Store,
}

impl HistoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Missing or non-positive parameters silently fall back to page 1 and
    /// a page size of 10. That permissiveness is contract, not a gap.
    pub async fn list(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<HistoryPage, HistoryError> {
        let page = coerce(page, DEFAULT_PAGE);
        let page_size = coerce(page_size, DEFAULT_PAGE_SIZE);

        let total_results = self
            .store
            .count_search_records()
            .await
            .map_err(|e| HistoryError::Store(e.to_string()))?;

        let total_pages = total_results.div_ceil(page_size);

        let results = self
            .store
            .list_search_records(page, page_size)
            .await
            .map_err(|e| HistoryError::Store(e.to_string()))?;

        Ok(HistoryPage {
            results,
            total_results,
            total_pages,
            current_page: page,
        })
    }
}

fn coerce(value: Option<i64>, default: u64) -> u64 {
    match value {
        Some(v) if v >= 1 => v as u64,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_defaults() {
        assert_eq!(coerce(None, DEFAULT_PAGE), 1);
        assert_eq!(coerce(Some(0), DEFAULT_PAGE), 1);
        assert_eq!(coerce(Some(-3), DEFAULT_PAGE_SIZE), 10);
        assert_eq!(coerce(Some(7), DEFAULT_PAGE_SIZE), 7);
    }

    async fn seeded_service(records: usize) -> HistoryService {
        let store = Store::new("sqlite::memory:").await.unwrap();
        for i in 0..records {
            store
                .create_search_record(&format!("kw{i}"), &[])
                .await
                .unwrap();
        }
        HistoryService::new(store)
    }

    #[tokio::test]
    async fn test_empty_store_yields_zero_pages() {
        let service = seeded_service(0).await;
        let page = service.list(None, None).await.unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn test_page_count_is_ceiling() {
        let service = seeded_service(11).await;

        let page = service.list(Some(1), Some(10)).await.unwrap();
        assert_eq!(page.total_results, 11);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.results.len(), 10);

        let page = service.list(Some(2), Some(10)).await.unwrap();
        assert_eq!(page.results.len(), 1);
    }

    #[tokio::test]
    async fn test_page_beyond_range_keeps_totals() {
        let service = seeded_service(3).await;

        let page = service.list(Some(9), Some(10)).await.unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 9);
    }

    #[tokio::test]
    async fn test_invalid_params_coerce_to_defaults() {
        let service = seeded_service(2).await;

        let page = service.list(Some(-1), Some(0)).await.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_pages, 1);
    }
}
