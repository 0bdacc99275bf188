use anyhow::Context;
use fidara_stub::api::router::{AppState, build_router};
use fidara_stub::catalog::store::Catalog;
use fidara_stub::config::AppConfig;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fidara_stub::telemetry::init();

    // 1. Configuration:
    let config = AppConfig::from_env()?;
    tracing::info!("Default top_k: {}", config.default_top_k);

    // 2. Catalog (immutable for the process lifetime):
    let catalog = Arc::new(Catalog::load(config.catalog_path.as_deref())?);

    // 3. HTTP Router:
    let state = Arc::new(AppState {
        catalog,
        api_key: config.api_key,
        default_top_k: config.default_top_k,
    });
    let app = build_router(state);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
