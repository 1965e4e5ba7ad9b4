use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::SearchResponse};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text query; missing is the same as empty.
    #[serde(default)]
    q: String,
}

/// `GET /search?q=<query>`
///
/// Proxies the upstream catalogue: success is `200 {"results": […]}` (empty
/// query included); any failure becomes `500 {"error": …}` via `AppError`.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let results = state.aggregator.search(&params.q).await?;
    Ok(Json(SearchResponse { results }))
}
