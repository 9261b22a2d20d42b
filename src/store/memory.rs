//! In-process store. Used for tests and for running without a database.

use super::AssetStore;
use crate::error::StoreError;
use crate::model::{Asset, NewAsset};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    last_id: i64,
    /// Ordered by id, which is also insertion order.
    rows: BTreeMap<i64, Asset>,
    by_name: HashMap<String, i64>,
}

/// Every mutation runs under a single write lock, so the uniqueness check and
/// the insert are one atomic step.
#[derive(Default)]
pub struct MemoryAssetStore {
    inner: RwLock<Inner>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn list(&self) -> Result<Vec<Asset>, StoreError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Asset, StoreError> {
        self.read()?.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Asset, StoreError> {
        let inner = self.read()?;
        inner
            .by_name
            .get(name)
            .and_then(|id| inner.rows.get(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, asset: NewAsset) -> Result<Asset, StoreError> {
        let mut inner = self.write()?;
        if inner.by_name.contains_key(&asset.name) {
            return Err(StoreError::Conflict { name: asset.name });
        }
        inner.last_id += 1;
        let row = Asset {
            id: inner.last_id,
            name: asset.name,
            value: asset.value,
        };
        inner.by_name.insert(row.name.clone(), row.id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, asset: NewAsset) -> Result<Asset, StoreError> {
        let mut inner = self.write()?;
        let old_name = match inner.rows.get(&id) {
            Some(row) => row.name.clone(),
            None => return Err(StoreError::NotFound),
        };
        if let Some(&owner) = inner.by_name.get(&asset.name) {
            if owner != id {
                return Err(StoreError::Conflict { name: asset.name });
            }
        }
        inner.by_name.remove(&old_name);
        inner.by_name.insert(asset.name.clone(), id);
        let row = Asset {
            id,
            name: asset.name,
            value: asset.value,
        };
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let row = inner.rows.remove(&id).ok_or(StoreError::NotFound)?;
        inner.by_name.remove(&row.name);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
