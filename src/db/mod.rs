use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use crate::models::record::SearchRecord;
use crate::models::repository::RepositorySummary;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // A pooled :memory: database is per-connection; a single connection
        // keeps every query on the same database.
        let in_memory = db_url.contains(":memory:");
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn search_record_repo(&self) -> repositories::search_record::SearchRecordRepository {
        repositories::search_record::SearchRecordRepository::new(self.conn.clone())
    }

    pub async fn create_search_record(
        &self,
        keyword: &str,
        results: &[RepositorySummary],
    ) -> Result<SearchRecord> {
        self.search_record_repo().create(keyword, results).await
    }

    pub async fn count_search_records(&self) -> Result<u64> {
        self.search_record_repo().count().await
    }

    pub async fn list_search_records(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<SearchRecord>> {
        self.search_record_repo().page(page, page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            full_name: format!("owner/{name}"),
            url: format!("https://github.com/owner/{name}"),
            description: None,
            stars: 1,
            language: Some("Rust".to_string()),
        }
    }

    async fn memory_store() -> Store {
        Store::new("sqlite::memory:").await.expect("store")
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let store = memory_store().await;

        let record = store
            .create_search_record("rust", &[summary("tokio")])
            .await
            .unwrap();

        assert!(record.id >= 1);
        assert_eq!(record.keyword, "rust");
        assert_eq!(record.results.len(), 1);
        assert!(!record.created_at.is_empty());
        assert_eq!(store.count_search_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_set_is_storable() {
        let store = memory_store().await;

        let record = store.create_search_record("nohits", &[]).await.unwrap();
        assert!(record.results.is_empty());

        let page = store.list_search_records(1, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert!(page[0].results.is_empty());
    }

    #[tokio::test]
    async fn test_page_orders_newest_first() {
        let store = memory_store().await;

        for keyword in ["first", "second", "third"] {
            store.create_search_record(keyword, &[]).await.unwrap();
        }

        let page = store.list_search_records(1, 10).await.unwrap();
        let keywords: Vec<&str> = page.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_page_slicing_and_beyond_range() {
        let store = memory_store().await;

        for i in 0..5 {
            store
                .create_search_record(&format!("kw{i}"), &[])
                .await
                .unwrap();
        }

        let first = store.list_search_records(1, 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].keyword, "kw4");

        let last = store.list_search_records(3, 2).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].keyword, "kw0");

        let beyond = store.list_search_records(4, 2).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(store.count_search_records().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let store = memory_store().await;

        store
            .create_search_record("rust", &[summary("tokio"), summary("serde")])
            .await
            .unwrap();

        let a = store.list_search_records(1, 10).await.unwrap();
        let b = store.list_search_records(1, 10).await.unwrap();
        assert_eq!(a, b);
    }
}
