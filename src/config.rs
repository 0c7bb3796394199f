use anyhow::{Context, Result};
use moka::future::Cache;
use sea_orm::Database;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::schemas::AppState;

/// Tunables read from `TAXDASH_*` environment variables (and `.env`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Maximum number of cached API responses
    pub cache_capacity: u64,
    /// Lifetime of a cached response in seconds
    pub cache_ttl_secs: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            cache_ttl_secs: 300,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::with_prefix("TAXDASH").try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("cache_capacity", defaults.cache_capacity)?
            .set_default("cache_ttl_secs", defaults.cache_ttl_secs)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(source)
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid TAXDASH_* configuration")
    }
}

/// Connect to the database and build the shared application state.
pub async fn initialize_app_state_with_url(database_url: &str, config: &AppConfig) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{database_url}'"))?;

    let cache = Cache::builder()
        .max_capacity(config.cache_capacity)
        .time_to_live(Duration::from_secs(config.cache_ttl_secs))
        .build();

    Ok(AppState {
        db,
        cache,
        request_timeout: Duration::from_secs(config.request_timeout_secs),
    })
}
