//! PostgreSQL store. The `asset` table carries a unique constraint on `name` and a
//! check constraint on `value`, so both invariants hold under concurrent writers.

use super::AssetStore;
use crate::error::StoreError;
use crate::model::{Asset, NewAsset};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

const ASSET_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS asset (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        value BIGINT NOT NULL,
        CONSTRAINT uq_asset_name UNIQUE (name),
        CONSTRAINT ck_asset_value_non_negative CHECK (value >= 0)
    )
"#;

#[derive(Clone)]
pub struct PgAssetStore {
    pool: PgPool,
}

impl PgAssetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `asset` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(ASSET_TABLE_DDL).execute(&self.pool).await?;
        Ok(())
    }
}

/// Translate constraint violations; everything else stays a database error.
fn classify(err: sqlx::Error, name: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return StoreError::Conflict {
                    name: name.to_string(),
                }
            }
            Some(CHECK_VIOLATION) => {
                return StoreError::Integrity(
                    db_err.constraint().unwrap_or("check").to_string(),
                )
            }
            _ => {}
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn list(&self) -> Result<Vec<Asset>, StoreError> {
        let rows = sqlx::query_as::<_, Asset>("SELECT id, name, value FROM asset ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Asset, StoreError> {
        sqlx::query_as::<_, Asset>("SELECT id, name, value FROM asset WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Asset, StoreError> {
        sqlx::query_as::<_, Asset>("SELECT id, name, value FROM asset WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, asset: NewAsset) -> Result<Asset, StoreError> {
        tracing::debug!(name = %asset.name, "insert asset");
        sqlx::query_as::<_, Asset>(
            "INSERT INTO asset (name, value) VALUES ($1, $2) RETURNING id, name, value",
        )
        .bind(&asset.name)
        .bind(asset.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, &asset.name))
    }

    async fn update(&self, id: i64, asset: NewAsset) -> Result<Asset, StoreError> {
        tracing::debug!(id, name = %asset.name, "update asset");
        sqlx::query_as::<_, Asset>(
            "UPDATE asset SET name = $2, value = $3 WHERE id = $1 RETURNING id, name, value",
        )
        .bind(id)
        .bind(&asset.name)
        .bind(asset.value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, &asset.name))?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM asset WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let Some((admin_url, db_name)) = split_db_name(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split `postgres://host/db?opts` into the admin URL (`postgres://host/postgres?opts`)
/// and the database name. The database is whatever follows the last `/` before the query,
/// so a `/` inside the userinfo does not confuse the split.
fn split_db_name(url: &str) -> Option<(String, String)> {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };
    let scheme_end = base.find("://")? + 3;
    let slash = base.rfind('/')?;
    if slash < scheme_end {
        return None;
    }
    let mut admin_url = format!("{}postgres", &base[..=slash]);
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Some((admin_url, base[slash + 1..].trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
