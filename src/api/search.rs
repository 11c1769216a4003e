use axum::{
    Json,
    extract::State,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, SearchResponse};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: String,
}

pub async fn run_search(
    State(state): State<Arc<SharedState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let record = state.ingest.ingest(&payload.keyword).await?;

    Ok(Json(SearchResponse {
        message: "Search completed and stored".to_string(),
        data: record.results,
    }))
}
