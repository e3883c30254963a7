//! Error pages

use axum::http::StatusCode;

use super::layout;

/// Page for a 400, 404 or 500 response
pub fn error_page(status: StatusCode, flashes: &[String]) -> String {
    let (title, text) = match status {
        StatusCode::NOT_FOUND => ("Not Found", "The page you were looking for does not exist."),
        StatusCode::BAD_REQUEST => ("Bad Request", "The request could not be processed."),
        _ => ("Server Error", "Something went wrong on our side."),
    };
    let body = format!(
        r#"<section class="error">
            <h1>{code}</h1>
            <h2>{title}</h2>
            <p>{text}</p>
            <a class="button" href="/">Back to home</a>
        </section>"#,
        code = status.as_u16(),
        title = title,
        text = text,
    );
    layout(title, flashes, &body)
}
