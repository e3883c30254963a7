//! Error types for fyyur-web
//!
//! Every failure becomes one of three HTML error pages. The page carries a
//! user-facing message; store failures are logged with their cause and shown
//! only as a generic message.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::ui::errors::error_page;

pub const BAD_REQUEST_MESSAGE: &str = "Bad request. Please try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found (404); holds the entity, e.g. `Venue 3`
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// fyyur-common error
    #[error("Common error: {0}")]
    Common(#[from] fyyur_common::Error),
}

impl ApiError {
    /// 404 for `{kind} {id}`
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {}", kind, id))
    }

    fn status_and_flashes(self) -> (StatusCode, Vec<String>) {
        use fyyur_common::Error as Common;

        match self {
            ApiError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                let flash = if msg.is_empty() { BAD_REQUEST_MESSAGE.to_string() } else { msg };
                (StatusCode::BAD_REQUEST, vec![flash])
            }
            ApiError::NotFound(what) | ApiError::Common(Common::NotFound(what)) => {
                (StatusCode::NOT_FOUND, vec![format!("{} not found.", what)])
            }
            ApiError::Common(Common::Validation(errors)) => {
                warn!("Form rejected: {}", errors);
                let mut flashes = vec![BAD_REQUEST_MESSAGE.to_string()];
                flashes.extend(errors.iter().map(|e| format!("{}: {}", e.field, e.message)));
                (StatusCode::BAD_REQUEST, flashes)
            }
            ApiError::Common(Common::InvalidInput(msg)) => {
                warn!("Invalid input: {}", msg);
                (StatusCode::BAD_REQUEST, vec![BAD_REQUEST_MESSAGE.to_string(), msg])
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![SERVER_ERROR_MESSAGE.to_string()])
            }
            ApiError::Common(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![SERVER_ERROR_MESSAGE.to_string()])
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, flashes) = self.status_and_flashes();
        (status, Html(error_page(status, &flashes))).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
