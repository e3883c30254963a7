//! HTTP handlers for fyyur-web

pub mod artists;
pub mod assets;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use assets::{serve_app_js, serve_css};
pub use health::health_routes;
pub use home::{home_page, not_found};

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use fyyur_common::FormData;
use tracing::warn;

use crate::error::{ApiError, ApiResult};

/// Urlencoded form body, repeated keys preserved
///
/// A body axum cannot read as a form becomes the 400 error page. Oversized
/// bodies keep the body-limit 413.
pub struct FormBody(pub FormData);

#[async_trait]
impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(FormBody(FormData::from_pairs(pairs))),
            Err(rejection) => Err(reject_form(rejection)),
        }
    }
}

fn reject_form(rejection: FormRejection) -> Response {
    let status = rejection.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return rejection.into_response();
    }
    warn!("Unreadable form body ({}): {}", status, rejection.body_text());
    if status.is_server_error() {
        ApiError::Internal(rejection.body_text()).into_response()
    } else {
        ApiError::BadRequest(rejection.body_text()).into_response()
    }
}

/// `search_term` from a search form; a request without a body searches for ""
pub struct SearchTerm(pub String);

#[async_trait]
impl<S> FromRequest<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return Ok(SearchTerm(String::new()));
        }
        let FormBody(data) = FormBody::from_request(req, state).await?;
        Ok(SearchTerm(data.get("search_term").unwrap_or_default().to_string()))
    }
}

/// Parse an id from the path; anything that is not an integer cannot name a row
pub(crate) fn parse_id(kind: &str, raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::not_found(kind, raw))
}
