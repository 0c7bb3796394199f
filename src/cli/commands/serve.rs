use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info, trace, warn};

use super::initdb::apply_migrations;
use crate::config::{AppConfig, initialize_app_state_with_url};
use crate::router::create_router;

/// Resolves on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

pub async fn serve(database_url: &str, bind_address: &str, migrate: bool) -> Result<()> {
    trace!("Entering serve function");
    info!("TaxDash API starting up");
    debug!("Database URL: {}", database_url);

    let config = AppConfig::load()?;
    debug!(?config, "Loaded application configuration");

    let state = initialize_app_state_with_url(database_url, &config)
        .await
        .context("Failed to initialize application state")?;
    debug!(
        cache_capacity = config.cache_capacity,
        cache_ttl_secs = config.cache_ttl_secs,
        "Response cache ready"
    );

    if migrate {
        apply_migrations(&state.db).await?;
    }

    let app = create_router(state);
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {bind_address}"))?;

    info!("TaxDash API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown gracefully");
    Ok(())
}
