//! HTTP API server for FilmIQ.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_copy_implementations, reason = "Types may grow")]
#![allow(clippy::ref_patterns, reason = "Ref patterns are clearer")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use filmiq_service::DashboardService;
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Shared application state for all HTTP handlers.
///
/// Requests only read from it; each one derives its own filtered view.
pub struct AppState {
    pub service: Arc<DashboardService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<DashboardService>) -> Self {
        Self { service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/dataset", get(handlers::overview::dataset))
        .route("/api/filters", get(handlers::overview::filters))
        .route("/api/overview", get(handlers::overview::overview))
        .route("/api/movies/search", get(handlers::movies::search))
        .route("/api/movies/{id}", get(handlers::movies::movie_detail))
        .route("/api/directors", get(handlers::directors::directors))
        .route("/api/directors/movies", get(handlers::directors::movies_by_director))
        .route("/api/actors", get(handlers::actors::actors))
        .route("/api/actors/movies", get(handlers::actors::movies_by_actor))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
