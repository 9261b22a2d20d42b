//! Process settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/assets";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which [`AssetStore`](crate::store::AssetStore) implementation to wire at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `BIND_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: String,
    /// `ASSET_STORE`, `postgres` (default) or `memory`.
    pub store: StoreBackend,
    /// `DATABASE_URL`, default `postgres://localhost/assets`. Ignored for the memory store.
    pub database_url: String,
    /// `DB_MAX_CONNECTIONS`, default 5.
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            store: StoreBackend::default(),
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let store = match lookup("ASSET_STORE") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "ASSET_STORE", value: v })?,
            None => defaults.store,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: v }),
            },
            None => defaults.max_connections,
        };
        Ok(Settings {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            store,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections,
        })
    }
}
