// GET /scrape — run the bounty pipeline once and return its outcome.
//
// Intended for an external scheduler (cron, Vercel/Railway cron jobs) to hit
// periodically. Overlapping requests are serialized by BountyWatch.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use crate::web::{api_error, AppState};

/// GET /scrape — fetch, select, and announce the top new bounty.
pub async fn trigger_run(State(state): State<AppState>) -> impl IntoResponse {
    match state.watch.run().await {
        Ok(outcome) => Json(outcome.to_json()).into_response(),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Bounty run failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}"))
        }
    }
}
