use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use filmiq_service::aggregate::MovieDetail;
use serde_json::Value;

use super::render;
use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_result;
use crate::query_types::{FormatQuery, SearchQuery};

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
    Query(format): Query<FormatQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = Arc::clone(&state.service);
    let limit = query.capped_limit();
    let hits = blocking_result(move || service.search(&query.q, limit)).await?;
    render(&hits, format.format)
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetail>, ApiError> {
    let service = Arc::clone(&state.service);
    let lookup = id.clone();
    blocking_result(move || service.movie_detail(&lookup))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("movie '{id}' not found")))
}
