//! Asset record and the request payload accepted for writes.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored asset. `id` is assigned by the store on create and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub value: i64,
}

/// Body of `POST /assets` and `PUT /assets/{id}`.
///
/// Every field is optional at the wire level so that a missing `name` or `value`
/// is reported as a validation failure rather than a deserialization error.
/// `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssetPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, range(min = 0))]
    pub value: Option<i64>,
}

/// Validated write: the only shape a store accepts for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub value: i64,
}

impl AssetPayload {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            value: Some(value),
        }
    }

    /// Check field constraints and drop the client-supplied id.
    pub fn into_new_asset(self) -> Result<NewAsset, AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        match (self.name, self.value) {
            (Some(name), Some(value)) => Ok(NewAsset { name, value }),
            _ => Err(AppError::Validation("name and value are required".into())),
        }
    }
}
