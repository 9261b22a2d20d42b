//! Validation, existence and uniqueness checks in front of the store.

use crate::error::{AppError, StoreError};
use crate::model::{Asset, AssetPayload};
use crate::store::AssetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn AssetStore> {
        &self.store
    }

    pub async fn list(&self) -> Result<Vec<Asset>, AppError> {
        tracing::info!("listing assets");
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Asset, AppError> {
        tracing::info!(id, "finding asset by id");
        Ok(self.store.get(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Asset, AppError> {
        tracing::info!(%name, "finding asset by name");
        Ok(self.store.get_by_name(name).await?)
    }

    /// The name pre-check gives the common case a clean 409; the store's own
    /// uniqueness constraint decides races, which also surface as 409.
    pub async fn create(&self, payload: AssetPayload) -> Result<Asset, AppError> {
        tracing::info!("creating asset");
        let asset = payload.into_new_asset()?;
        match self.store.get_by_name(&asset.name).await {
            Ok(_) => return Err(AppError::Conflict(asset.name)),
            Err(StoreError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }
        Ok(self.store.create(asset).await?)
    }

    /// The path id wins over any id in the body. Renaming onto a name owned by
    /// another asset is a constraint violation (400), not a 409.
    pub async fn update(&self, id: i64, payload: AssetPayload) -> Result<Asset, AppError> {
        tracing::info!(id, "updating asset");
        self.store.get(id).await?;
        let asset = payload.into_new_asset()?;
        self.store.update(id, asset).await.map_err(|e| match e {
            StoreError::Conflict { name } => {
                AppError::Constraint(format!("name '{}' is taken", name))
            }
            other => other.into(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::info!(id, "deleting asset");
        self.store.get(id).await?;
        Ok(self.store.delete(id).await?)
    }
}
