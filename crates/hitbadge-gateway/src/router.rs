//! Axum router wiring.
//!
//! Ops routes sit under their prefix; everything else falls through to the
//! badge handler regardless of method.

use axum::{routing::get, Router};

use crate::{app_state::AppState, http, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();

    let ops_cfg = &state.cfg().ops;
    if ops_cfg.enabled {
        router = router
            .route(&format!("{}/healthz", ops_cfg.prefix), get(ops::healthz))
            .route(&format!("{}/metrics", ops_cfg.prefix), get(ops::metrics));
    }

    router.fallback(http::hit).with_state(state)
}
