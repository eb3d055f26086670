use std::sync::Arc;

use anyhow::Result;
use filmiq_http::{AppState, create_router};
use filmiq_service::DashboardService;
use filmiq_storage::{DatasetCache, DatasetSources};

pub(crate) async fn run(sources: DatasetSources, port: u16, host: String) -> Result<()> {
    tracing::info!(
        movies = %sources.movies.display(),
        awards = %sources.awards.display(),
        "loading dataset"
    );
    let cache = Arc::new(DatasetCache::new());
    let service = tokio::task::spawn_blocking(move || DashboardService::from_cache(cache, sources))
        .await??;

    let state = Arc::new(AppState::new(Arc::new(service)));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
