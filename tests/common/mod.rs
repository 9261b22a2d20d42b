#![allow(dead_code)]

use std::sync::Arc;

use asset_registry::{
    build_app, AppState, Asset, AssetService, AssetStore, MemoryAssetStore, NewAsset, StoreError,
};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const API_ROOT: &str = "/version/v1/assets";

/// Full application router over a fresh in-memory store, with the same layers
/// production uses.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryAssetStore::new()))
}

pub fn build_test_app_with_store(store: Arc<dyn AssetStore>) -> Router {
    build_app(AppState::new(AssetService::new(store)))
}

/// How a [`FailingStore`] misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Every call returns an unclassified store error.
    Broken,
    /// Every call panics.
    Panics,
    /// Name lookups miss but inserts hit the uniqueness constraint, as when
    /// another writer commits the same name between the two calls.
    LostRace,
}

pub struct FailingStore(pub Failure);

impl FailingStore {
    fn fail<T>(&self) -> Result<T, StoreError> {
        match self.0 {
            Failure::Panics => panic!("store exploded"),
            _ => Err(StoreError::Poisoned),
        }
    }
}

#[async_trait]
impl AssetStore for FailingStore {
    async fn list(&self) -> Result<Vec<Asset>, StoreError> {
        self.fail()
    }

    async fn get(&self, _id: i64) -> Result<Asset, StoreError> {
        self.fail()
    }

    async fn get_by_name(&self, _name: &str) -> Result<Asset, StoreError> {
        match self.0 {
            Failure::LostRace => Err(StoreError::NotFound),
            _ => self.fail(),
        }
    }

    async fn create(&self, asset: NewAsset) -> Result<Asset, StoreError> {
        match self.0 {
            Failure::LostRace => Err(StoreError::Conflict { name: asset.name }),
            _ => self.fail(),
        }
    }

    async fn update(&self, _id: i64, _asset: NewAsset) -> Result<Asset, StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
