/// Server setup and initialization
///
/// Wires together all components: configuration, SQLite store, image store,
/// static file service, and HTTP routes. Provides the main application
/// factory function for creating the Axum app.

use crate::{
    config::Config,
    portfolio::PortfolioStore,
    uploads::ImageStore,
    web::{self, AppState},
};
use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Create the main Axum application with all routes
///
/// Ensures the static and upload directories exist, opens the database
/// (creating the schema idempotently), and wires the handlers to the shared
/// state. Uploaded images land under the static root, so one ServeDir covers
/// certificates, stylesheets, and the project galleries.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📁 Ensuring upload directory exists: {}", config.storage.upload_dir);
    std::fs::create_dir_all(&config.storage.upload_dir)?;

    tracing::info!("🗄️ Opening database: {}", config.database.path);
    let store = PortfolioStore::connect(&config.database.path).await?;

    let images = ImageStore::new(&config.storage.upload_dir);
    let state = AppState { store, images };

    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Site pages and forms
        .merge(web::routes().with_state(state))
        // Public assets: certificates, stylesheets, uploaded gallery images
        .nest_service("/static", ServeDir::new(&config.storage.static_dir));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting NovaVerse server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can finish
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
