//! Static asset routes
//!
//! The stylesheet and script are compiled into the binary.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::ui::{APP_JS, FYYUR_CSS};

/// GET /static/fyyur.css
pub async fn serve_css() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/css")], FYYUR_CSS).into_response()
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
        .into_response()
}
