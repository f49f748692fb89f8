/// HTTP layer
///
/// Route handlers mapping requests to store calls and HTML renders. Handlers
/// are stateless across requests except for the one-shot flash notice cookie.

use crate::{portfolio::PortfolioStore, uploads::ImageStore};
use axum::{
    routing::{get, post},
    Router,
};

// Static informational pages and the constant certificate table
pub mod pages;

// Project gallery: list, create with uploads, delete
pub mod projects;

// Contact form
pub mod contact;

// One-shot flash notice cookie
pub mod flash;

// Shared HTML layout and escaping
pub mod render;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// SQLite store for projects, images, and messages
    pub store: PortfolioStore,
    /// Disk store for uploaded gallery images
    pub images: ImageStore,
}

/// Create the site routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/resume", get(pages::resume))
        .route("/certificates", get(pages::certificates))
        .route("/projects", get(projects::list_projects))
        .route(
            "/projects/add",
            get(projects::add_project_form).post(projects::submit_project),
        )
        .route("/projects/delete/{id}", post(projects::delete_project))
        .route(
            "/contact",
            get(contact::contact_form).post(contact::submit_contact),
        )
}
