//! Route security: no authentication, a method allow-list, and deny-by-default
//! for everything outside the open prefixes.

use axum::{
    extract::{OriginalUri, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::HEAD,
];

/// Path prefixes reachable without credentials.
pub const OPEN_PREFIXES: [&str; 3] = ["/version/", "/api/", "/actuator/"];

/// Rejects any method outside [`ALLOWED_METHODS`] before routing.
pub async fn allow_listed_methods(req: Request, next: Next) -> Response {
    if ALLOWED_METHODS.contains(req.method()) {
        return next.run(req).await;
    }
    tracing::warn!(method = %req.method(), uri = %req.uri(), "method rejected");
    StatusCode::METHOD_NOT_ALLOWED.into_response()
}

/// Router fallback: unmapped paths under an open prefix are 404, anything else 403.
pub async fn deny_unlisted(OriginalUri(uri): OriginalUri) -> StatusCode {
    let path = uri.path();
    if OPEN_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return StatusCode::NOT_FOUND;
    }
    tracing::warn!(%uri, "access denied");
    StatusCode::FORBIDDEN
}

/// Last-resort boundary for panics inside handlers: log and answer a bare 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "unable to handle request");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
