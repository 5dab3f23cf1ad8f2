//! Badge endpoint.
//!
//! Any method on any path not claimed by an ops route lands here and counts
//! as one hit on the normalized path.

pub mod response;

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Response,
};
use tracing::{error, info, warn};

use hitbadge_core::badge::{self, BadgeConfig};
use hitbadge_core::error::{ClientCode, Result};
use hitbadge_core::CounterKey;

use crate::app_state::AppState;
use crate::counter;

pub async fn hit(
    State(app): State<AppState>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let key = CounterKey::normalize(uri.path());

    let res = count_and_render(&app, &key, &query).await;
    let metrics = app.metrics();

    let outcome = match &res {
        Ok(_) => "ok",
        Err(e) => match e.client_code() {
            ClientCode::BadRequest => {
                warn!(%key, error = %e, "rejected badge request");
                "bad_request"
            }
            ClientCode::StoreUnavailable => {
                error!(%key, error = %e, "counter store failed");
                "store_error"
            }
            ClientCode::Internal => {
                error!(%key, error = %e, "badge request failed");
                "internal"
            }
        },
    };
    metrics.hits.inc(&[("outcome", outcome)]);
    metrics.request_duration.observe(&[], started.elapsed());

    match res {
        Ok(svg) => response::svg(svg),
        Err(e) => response::error(&e),
    }
}

/// The whole pipeline. The counter write is not undone if building the badge fails.
async fn count_and_render(
    app: &AppState,
    key: &CounterKey,
    query: &HashMap<String, String>,
) -> Result<String> {
    let start = query.get("start").map(String::as_str);
    let persisted = counter::resolve_and_increment(app.store(), key, start).await?;

    let cfg = BadgeConfig::build(query, persisted, app.badge_defaults())?;
    info!(%key, persisted, message = %cfg.message, style = %cfg.style, "badge hit");
    Ok(badge::render(&cfg))
}
