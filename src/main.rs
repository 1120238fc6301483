use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use typing_content_api::config::Config;
use typing_content_api::server;
use typing_content_api::state::AppState;
use typing_content_api::words::WordCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typing_content_api=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting typing content API");

    let config = Config::from_env()?;

    // Word pools are loaded once and shared read-only by every request
    let catalog = WordCatalog::load(config.word_pools_dir.as_deref())
        .context("Failed to load word pools")?;
    info!("Loaded word pools for {} locales", catalog.locale_count());

    let app = server::router(Arc::new(AppState::new(catalog)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("✓ Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
