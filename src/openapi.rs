//! OpenAPI document for the asset routes.

use crate::handlers::assets;
use crate::model::{Asset, AssetPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(license(name = "MIT", url = "https://opensource.org/licenses/MIT")),
    paths(
        assets::list,
        assets::create,
        assets::read,
        assets::read_by_name,
        assets::update,
        assets::delete
    ),
    components(schemas(Asset, AssetPayload)),
    tags((name = "Assets", description = "Create, read, update and delete assets"))
)]
pub struct ApiDoc;

/// Title and version come from the package metadata.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
