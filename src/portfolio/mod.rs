/// Portfolio domain layer
///
/// Handles the two record-keeping features of the site:
/// - Type definitions (Project, ProjectImage, Message) and form validation
/// - SQLite persistence with sqlx

// Core portfolio type definitions and form payloads
pub mod types;

// SQLite persistence layer
pub mod store;

// Re-export commonly used types
pub use store::PortfolioStore;
pub use types::{ContactForm, Message, Project, ProjectForm};
