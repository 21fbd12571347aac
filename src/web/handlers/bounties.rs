// GET /bounties — list every currently extracted bounty, ignoring dedup.
//
// Optional ?within_hours= narrows the default 24-hour window (e.g. 6 to see
// only the last six hours). Nothing is sent or recorded.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{TimeDelta, Utc};
use serde::Deserialize;

use crate::select::filter_recent;
use crate::web::AppState;

#[derive(Deserialize, Default)]
pub struct BountiesQuery {
    pub within_hours: Option<u32>,
}

/// GET /bounties — debug view of the parsed listing page.
pub async fn list_bounties(
    State(state): State<AppState>,
    Query(params): Query<BountiesQuery>,
) -> impl IntoResponse {
    let now = Utc::now();
    let mut bounties = state.watch.bounties_at(now).await;
    if let Some(hours) = params.within_hours {
        bounties = filter_recent(&bounties, now, TimeDelta::hours(i64::from(hours)));
    }

    let bounties: Vec<serde_json::Value> = bounties
        .iter()
        .map(|b| {
            serde_json::json!({
                "title": b.title,
                "price": b.price,
                "link": b.link,
                "posted_time": b.posted_time.map(|t| t.to_rfc3339()),
            })
        })
        .collect();

    Json(serde_json::json!({ "bounties": bounties }))
}
