//! Asset server: reads settings, wires the chosen store into the service and
//! serves the asset API.
//!
//! Run from repo root: `cargo run -p asset-server`
//! Without a database: `ASSET_STORE=memory cargo run -p asset-server`

use asset_registry::{
    build_app, ensure_database_exists, AppState, AssetService, AssetStore, MemoryAssetStore,
    PgAssetStore, Settings, StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("asset_registry=info,asset_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = open_store(&settings).await?;
    let state = AppState::new(AssetService::new(store));
    let app = build_app(state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn open_store(settings: &Settings) -> Result<Arc<dyn AssetStore>, Box<dyn std::error::Error>> {
    match settings.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory asset store; data is lost on exit");
            Ok(Arc::new(MemoryAssetStore::new()))
        }
        StoreBackend::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            let store = PgAssetStore::new(pool);
            store.ensure_schema().await?;
            tracing::info!("asset table ready");
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
