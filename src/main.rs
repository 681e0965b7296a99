use anyhow::{Context, Result};
use keys_and_translations::config::Config;
use keys_and_translations::detect::{DetectLanguageClient, LanguageDetector};
use keys_and_translations::routes::build_router;
use keys_and_translations::state::AppState;
use keys_and_translations::store::{MemoryStore, PgStore, Store};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keys_and_translations=info".parse()?),
        )
        .init();

    info!("Starting keys and translations service");

    // Load configuration from environment
    let config = Config::from_env()?;

    let store: Arc<dyn Store> = match config.database_url {
        Some(_) => {
            info!("Connecting to PostgreSQL");
            Arc::new(PgStore::connect(&config).await?)
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store (data is lost on exit)");
            Arc::new(MemoryStore::new())
        }
    };

    let detector: Arc<dyn LanguageDetector> = Arc::new(
        DetectLanguageClient::new(&config).context("Failed to build language detection client")?,
    );

    let app = build_router(AppState::new(store, detector));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
