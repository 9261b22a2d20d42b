//! Asset CRUD handlers: list, create, read by id or name, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Asset, AssetPayload};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// List all assets
#[utoipa::path(
    get,
    path = "/version/v1/assets",
    tag = "Assets",
    responses((status = 200, description = "All assets in insertion order", body = [Asset]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, AppError> {
    Ok(Json(state.assets.list().await?))
}

/// Create asset
#[utoipa::path(
    post,
    path = "/version/v1/assets",
    tag = "Assets",
    request_body = AssetPayload,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Malformed body or invalid fields"),
        (status = 409, description = "Asset with this name already exists")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    let asset = state.assets.create(payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Get asset
#[utoipa::path(
    get,
    path = "/version/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset found", body = Asset),
        (status = 404, description = "Asset with provided id not found")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Asset>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(state.assets.get(id).await?))
}

/// Get asset by name
#[utoipa::path(
    get,
    path = "/version/v1/assets/name/{name}",
    tag = "Assets",
    params(("name" = String, Path, description = "Exact asset name")),
    responses(
        (status = 200, description = "Asset found", body = Asset),
        (status = 404, description = "Asset with provided name not found")
    )
)]
pub async fn read_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Asset>, AppError> {
    Ok(Json(state.assets.get_by_name(&name).await?))
}

/// Update asset
#[utoipa::path(
    put,
    path = "/version/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id; overrides any id in the body")),
    request_body = AssetPayload,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 400, description = "Malformed body, invalid fields or name taken"),
        (status = 404, description = "Asset with provided id not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(payload): JsonBody<AssetPayload>,
) -> Result<Json<Asset>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(state.assets.update(id, payload).await?))
}

/// Delete asset
#[utoipa::path(
    delete,
    path = "/version/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset deleted"),
        (status = 404, description = "Asset with provided id not found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    state.assets.delete(id).await?;
    Ok(StatusCode::OK)
}
