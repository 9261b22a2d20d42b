//! HTTP handlers for asset CRUD and operational endpoints.

pub mod assets;
pub mod ops;
