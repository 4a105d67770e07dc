// Initialize configuration
// Set up logging
// Build upstream clients and the search aggregator
// Create shared state
// Start HTTP server

use creator_search_service::{api, build_search, cache::SessionCacheManager, config::Config, state::AppState};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting creator-search-service");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let search = build_search(&config)?;
    tracing::info!("Search aggregator ready with {:?}", search.settings());

    let sessions = SessionCacheManager::from_config(&config);
    tracing::info!(
        "Session cache initialized with idle TTL: {:?} and capacity: {}",
        config.session_ttl,
        config.session_max_capacity
    );

    // Create shared state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        search,
        sessions,
    });

    let shutdown = CancellationToken::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
        }
        signal_shutdown.cancel();
    });

    // Start HTTP server
    let app = api::create_router(app_state);
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
