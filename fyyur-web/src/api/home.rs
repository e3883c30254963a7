//! Home page and unmatched routes

use axum::{http::Uri, response::Html};

use crate::error::ApiError;
use crate::ui::pages;

/// GET /
pub async fn home_page() -> Html<String> {
    Html(pages::home(&[]))
}

/// Fallback for any route without a handler
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Page {}", uri.path()))
}
