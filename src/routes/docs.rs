//! API documentation route. Mounted under `/api`.

use crate::openapi::openapi;
use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// GET /openapi.json. The document is built once and served as static JSON.
pub fn docs_routes() -> Router {
    let doc = Arc::new(openapi());
    Router::new().route(
        "/openapi.json",
        get(move || {
            let doc = Arc::clone(&doc);
            async move { ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref())).into_response() }
        }),
    )
}
