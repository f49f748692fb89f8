use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error taxonomy
///
/// Validation failures are recoverable: the handler that produced one turns it
/// into a flash notice and a redirect, so it never escapes as a response.
/// Everything else is fatal for the request.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing required form field; the message is the user-visible notice
    #[error("{0}")]
    Validation(&'static str),

    #[error("Malformed form submission")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Store error: {0}")]
    Store(anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// anyhow::Error does not implement std::error::Error, so thiserror's #[from]
// cannot derive this one.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Store(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(..) | AppError::Multipart(..) => StatusCode::BAD_REQUEST,
            AppError::Store(..) | AppError::Io(..) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
