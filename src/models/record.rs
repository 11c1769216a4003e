use serde::{Deserialize, Serialize};

use crate::entities::search_records;
use crate::models::repository::RepositorySummary;

/// One persisted search outcome: the keyword as submitted, the normalized
/// results in provider rank order, and the store-assigned creation time.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    pub keyword: String,
    pub results: Vec<RepositorySummary>,
    pub created_at: String,
}

impl TryFrom<search_records::Model> for SearchRecord {
    type Error = serde_json::Error;

    fn try_from(model: search_records::Model) -> Result<Self, Self::Error> {
        let results: Vec<RepositorySummary> = serde_json::from_str(&model.results_json)?;
        Ok(Self {
            id: model.id,
            keyword: model.keyword,
            results,
            created_at: model.created_at,
        })
    }
}
