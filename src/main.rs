/// NovaVerse: a personal portfolio website
///
/// Main entry point. Loads configuration and starts the HTTP server.

use novaverse::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Static pages at /, /about, /resume, /certificates
/// - Project gallery at /projects (with /projects/add and /projects/delete/{id})
/// - Contact form at /contact
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3000, novaverse.db, ./static)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
