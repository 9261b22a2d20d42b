//! Asset persistence: the store contract and its implementations.

mod memory;
mod postgres;

pub use memory::MemoryAssetStore;
pub use postgres::{ensure_database_exists, PgAssetStore};

use crate::error::StoreError;
use crate::model::{Asset, NewAsset};
use async_trait::async_trait;

/// CRUD over assets keyed by id, with a unique secondary lookup by name.
///
/// Implementations must enforce name uniqueness atomically: of two concurrent
/// `create` calls with the same name, exactly one succeeds and the other gets
/// [`StoreError::Conflict`].
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// All assets in insertion order.
    async fn list(&self) -> Result<Vec<Asset>, StoreError>;

    async fn get(&self, id: i64) -> Result<Asset, StoreError>;

    async fn get_by_name(&self, name: &str) -> Result<Asset, StoreError>;

    /// Assign a fresh id and persist.
    async fn create(&self, asset: NewAsset) -> Result<Asset, StoreError>;

    /// Replace name and value of an existing row. The id is preserved.
    async fn update(&self, id: i64, asset: NewAsset) -> Result<Asset, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Liveness check backing `/actuator/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}
