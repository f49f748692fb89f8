/// NovaVerse: a personal portfolio website
///
/// Static informational pages plus two record-keeping features: a project
/// gallery with multi-image uploads and a contact-message inbox, backed by a
/// local SQLite database.

// Core configuration and setup
pub mod config;

// Application error taxonomy
pub mod error;

// Portfolio domain layer - entities, validation, and SQLite persistence
pub mod portfolio;

// Uploaded-image storage on disk
pub mod uploads;

// HTTP layer - page renders, forms, and flash notices
pub mod web;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use config::Config;
pub use error::AppError;
pub use portfolio::{ContactForm, Message, Project, ProjectForm};
pub use server::start_server;
