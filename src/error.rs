//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures signalled by an [`AssetStore`](crate::store::AssetStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("asset not found")]
    NotFound,
    #[error("asset name already taken: {name}")]
    Conflict { name: String },
    #[error("integrity constraint violated: {0}")]
    Integrity(String),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound("asset".into()),
            StoreError::Conflict { name } => AppError::Conflict(name),
            StoreError::Integrity(msg) => AppError::Constraint(msg),
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) | AppError::Constraint(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Known conditions become a bare status code. Unclassified failures are logged
/// and surface as a bare 500 with no detail. Request method and URI come from the
/// enclosing trace span.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(msg) => tracing::error!(error = %msg, "binding failed"),
            AppError::Validation(msg) | AppError::Constraint(msg) => {
                tracing::debug!(error = %msg, "request rejected")
            }
            AppError::NotFound(what) => tracing::warn!(%what, "asset not found"),
            AppError::Conflict(name) => tracing::warn!(%name, "asset already exists"),
            AppError::Store(e) => tracing::error!(error = ?e, "unable to handle request"),
        }
        self.status().into_response()
    }
}
