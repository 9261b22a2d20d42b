//! Router assembly.

mod assets;
mod docs;
mod ops;

pub use assets::asset_routes;
pub use docs::docs_routes;
pub use ops::{ops_routes, ops_routes_with_ready};

use crate::security::{allow_listed_methods, deny_unlisted, handle_panic};
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Versioned prefix for the asset API.
pub const API_PREFIX: &str = "/version/v1";

/// The full application: asset API, ops and docs routes, deny-by-default
/// fallback, method allow-list, request tracing and panic recovery.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, asset_routes(state.clone()))
        .nest("/actuator", ops_routes_with_ready(state))
        .nest("/api", docs_routes())
        .fallback(deny_unlisted)
        .layer(middleware::from_fn(allow_listed_methods))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
