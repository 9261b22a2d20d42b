//! Shared application state for all routes.

use crate::service::AssetService;

#[derive(Clone)]
pub struct AppState {
    pub assets: AssetService,
}

impl AppState {
    pub fn new(assets: AssetService) -> Self {
        Self { assets }
    }
}
