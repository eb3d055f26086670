//! Runs dashboard computations off the async executor.
//!
//! Page aggregations are CPU-bound and may stat the input files, so handlers
//! hand them to tokio's blocking pool and map both join and service errors
//! into [`ApiError`].

use axum::Json;
use filmiq_service::ServiceError;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and returns its value.
///
/// # Example
/// ```ignore
/// let page = blocking_result(move || service.overview(&spec)).await?;
/// ```
pub async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Join error: {}", e);
            ApiError::Internal(e.into())
        })?
        .map_err(ApiError::from)
}

/// Like [`blocking_result`], wrapping the value in `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    blocking_result(f).await.map(Json)
}
