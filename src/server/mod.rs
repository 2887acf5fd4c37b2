pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;
pub use handlers::AppState;

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Largest accepted request body. CSV content is posted back whole, so this is
/// well above axum's 2 MiB default.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-csv", post(handlers::generate_csv))
        .route("/download-scorm", post(handlers::download_scorm))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OpenAiClient::new(config.llm.clone());
    info!("Using completion model: {}", llm.model());

    let app = router(AppState::new(Arc::new(llm)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
