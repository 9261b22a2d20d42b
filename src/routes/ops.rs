//! Operational routes: health, readiness, info. Mounted under `/actuator`.

use crate::handlers::ops::{health, info, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes that need no state: GET /health, GET /info.
pub fn ops_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
}

/// Ops routes including readiness, which pings the store.
pub fn ops_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(ops_routes())
}
