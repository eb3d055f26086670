use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;

use super::{render, resolve_filter};
use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_result;
use crate::query_types::{FilterQuery, FormatQuery, NameQuery};

pub async fn actors(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FilterQuery>,
    Query(format): Query<FormatQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = Arc::clone(&state.service);
    let page = blocking_result(move || {
        let spec = resolve_filter(&service, filter)?;
        service.actors(&spec)
    })
    .await?;
    render(&page, format.format)
}

pub async fn movies_by_actor(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FilterQuery>,
    Query(person): Query<NameQuery>,
    Query(format): Query<FormatQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = Arc::clone(&state.service);
    let movies = blocking_result(move || {
        let spec = resolve_filter(&service, filter)?;
        service.movies_by_actor(&spec, &person.name)
    })
    .await?;
    render(&movies, format.format)
}
