use serde::Serialize;

use crate::models::record::SearchRecord;
use crate::models::repository::RepositorySummary;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub message: String,
    pub data: Vec<RepositorySummary>,
}

/// Wire shape of one stored search: the normalized list is exposed as
/// `data` and the creation time as `timestamp`.
#[derive(Debug, Serialize)]
pub struct SearchRecordDto {
    pub id: i64,
    pub keyword: String,
    pub data: Vec<RepositorySummary>,
    pub timestamp: String,
}

impl From<SearchRecord> for SearchRecordDto {
    fn from(record: SearchRecord) -> Self {
        Self {
            id: record.id,
            keyword: record.keyword,
            data: record.results,
            timestamp: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub results: Vec<SearchRecordDto>,
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u64,
}
