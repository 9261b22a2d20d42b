//! AssetService: request orchestration over an [`AssetStore`](crate::store::AssetStore).

mod assets;
pub use assets::AssetService;
