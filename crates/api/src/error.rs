use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Every variant carries the exact message sent to the client. Handlers pick
/// the message from the resource's catalog; the underlying cause has already
/// been logged by then and never reaches the response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed id, rejected payload, or a write that affected no rows.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Single-entity lookup found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store failure or any other unexpected error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => msg,
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
