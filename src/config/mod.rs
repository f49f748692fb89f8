/// Configuration management for the NovaVerse site
///
/// Replaces the process-wide globals of the usual tiny-site setup (upload
/// folder, database path, bind address) with an explicit configuration struct
/// passed into the web layer at construction time.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Static asset and upload storage configuration
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (created if missing)
    pub path: String,
}

/// Static asset and upload storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory served at /static (certificates, stylesheets, uploads)
    pub static_dir: String,
    /// Directory for uploaded project images; kept under the static root so
    /// stored filenames resolve as public asset paths
    pub upload_dir: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        let static_dir =
            std::env::var("NOVAVERSE_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        Self {
            server: ServerConfig {
                host: std::env::var("NOVAVERSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("NOVAVERSE_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                path: std::env::var("NOVAVERSE_DB").unwrap_or_else(|_| "novaverse.db".to_string()),
            },
            storage: StorageConfig {
                upload_dir: std::env::var("NOVAVERSE_UPLOAD_DIR")
                    .unwrap_or_else(|_| format!("{static_dir}/images/projects")),
                static_dir,
            },
        }
    }
}
