//! Asset registry: CRUD REST service for named, non-negative valued assets.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Asset, AssetPayload, NewAsset};
pub use routes::{build_app, API_PREFIX};
pub use service::AssetService;
pub use state::AppState;
pub use store::{ensure_database_exists, AssetStore, MemoryAssetStore, PgAssetStore};
