use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, HistoryResponse, SearchRecordDto};
use crate::state::SharedState;

/// Params arrive as raw strings so that non-numeric values coerce to the
/// defaults instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_results(
    State(state): State<Arc<SharedState>>,
    Query(params): Query<ResultsQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let page = params.page.as_deref().and_then(|s| s.parse().ok());
    let limit = params.limit.as_deref().and_then(|s| s.parse().ok());

    let history = state.history.list(page, limit).await?;

    Ok(Json(HistoryResponse {
        results: history
            .results
            .into_iter()
            .map(SearchRecordDto::from)
            .collect(),
        total_results: history.total_results,
        total_pages: history.total_pages,
        current_page: history.current_page,
    }))
}
