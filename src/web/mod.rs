// Web server — Axum HTTP entrypoints for schedulers and debugging.
//
// Routes:
//   GET /          liveness, always {"status": "ok"}
//   GET /health    same, for platforms that probe /health
//   GET /scrape    run the pipeline once
//   GET /bounties  list parsed bounties without notifying
//
// No auth layer.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::BountyWatch;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub watch: Arc<BountyWatch>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(watch: BountyWatch, port: u16, bind: &str) -> Result<()> {
    let state = AppState {
        watch: Arc::new(watch),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("bountywatch listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/scrape", get(handlers::scrape::trigger_run))
        .route("/bounties", get(handlers::bounties::list_bounties))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
