use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use filmiq_service::FilterOptions;
use filmiq_storage::DatasetInfo;
use serde_json::Value;

use super::{render, resolve_filter};
use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::query_types::{FilterQuery, FormatQuery};

pub async fn overview(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FilterQuery>,
    Query(format): Query<FormatQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = Arc::clone(&state.service);
    let page = blocking_result(move || {
        let spec = resolve_filter(&service, filter)?;
        service.overview(&spec)
    })
    .await?;
    render(&page, format.format)
}

pub async fn filters(State(state): State<Arc<AppState>>) -> Result<Json<FilterOptions>, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_json(move || service.filter_options()).await
}

pub async fn dataset(State(state): State<Arc<AppState>>) -> Result<Json<DatasetInfo>, ApiError> {
    let service = Arc::clone(&state.service);
    blocking_json(move || service.dataset_info()).await
}
