use anyhow::Result;
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};

use crate::entities::{prelude::*, search_records};
use crate::models::record::SearchRecord;
use crate::models::repository::RepositorySummary;

pub struct SearchRecordRepository {
    conn: DatabaseConnection,
}

impl SearchRecordRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts one record. The creation timestamp is assigned here, not by
    /// the caller, so timestamps are non-decreasing in insert order.
    pub async fn create(
        &self,
        keyword: &str,
        results: &[RepositorySummary],
    ) -> Result<SearchRecord> {
        let results_json = serde_json::to_string(results)?;
        let created_at = chrono::Utc::now().to_rfc3339();

        let active_model = search_records::ActiveModel {
            keyword: Set(keyword.to_string()),
            results_json: Set(results_json),
            created_at: Set(created_at.clone()),
            ..Default::default()
        };

        let inserted = SearchRecords::insert(active_model).exec(&self.conn).await?;

        Ok(SearchRecord {
            id: inserted.last_insert_id,
            keyword: keyword.to_string(),
            results: results.to_vec(),
            created_at,
        })
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(SearchRecords::find().count(&self.conn).await?)
    }

    /// One page of records, newest first. `page` is 1-indexed; the id
    /// tie-break keeps equal timestamps stable across queries.
    pub async fn page(&self, page: u64, page_size: u64) -> Result<Vec<SearchRecord>> {
        let rows = SearchRecords::find()
            .order_by_desc(search_records::Column::CreatedAt)
            .order_by_desc(search_records::Column::Id)
            .offset((page - 1) * page_size)
            .limit(page_size)
            .all(&self.conn)
            .await?;

        rows.into_iter()
            .map(|row| SearchRecord::try_from(row).map_err(Into::into))
            .collect()
    }
}
