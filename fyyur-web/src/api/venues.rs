//! Venue pages: listing, search, detail, create, edit, delete

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use fyyur_common::{time, Error, FormData, VenueForm};
use tracing::debug;

use super::{parse_id, FormBody, SearchTerm};
use crate::error::{ApiError, ApiResult};
use crate::ui::{forms, pages};
use crate::{db, views, AppState};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let localities = views::venue_localities(&state.db, time::now()).await?;
    Ok(Html(pages::venues(&localities)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    SearchTerm(term): SearchTerm,
) -> ApiResult<Html<String>> {
    let results = views::search_venues(&state.db, &term, time::now()).await?;
    Ok(Html(pages::search_results("venues", &term, &results)))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let venue_id = parse_id("Venue", &raw_id)?;
    let detail = views::venue_detail(&state.db, venue_id, time::now()).await?;
    Ok(Html(pages::venue_detail(&detail)))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(forms::venue_form(
        "List a new venue",
        "/venues/create",
        &FormData::default(),
    ))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    FormBody(data): FormBody,
) -> ApiResult<Html<String>> {
    let form = VenueForm::validate(&data).map_err(Error::from)?;

    let venue_id = db::venues::create(&state.db, &form).await?;

    let flash = format!("Venue {} was successfully listed.", venue_id);
    Ok(Html(pages::home(&[flash])))
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let venue_id = parse_id("Venue", &raw_id)?;
    let venue = db::venues::load(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Venue", venue_id))?;

    Ok(Html(forms::venue_form(
        &format!("Edit venue {}", venue.name),
        &format!("/venues/{}/edit", venue_id),
        &forms::venue_values(&venue),
    )))
}

/// POST /venues/:id/edit
///
/// Replaces every field, then redirects to the detail page.
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    FormBody(data): FormBody,
) -> ApiResult<Redirect> {
    let venue_id = parse_id("Venue", &raw_id)?;
    if !db::venues::exists(&state.db, venue_id).await? {
        return Err(ApiError::not_found("Venue", venue_id));
    }

    let form = VenueForm::validate(&data).map_err(Error::from)?;
    db::venues::update(&state.db, venue_id, &form).await?;

    debug!("Redirecting to venue {}", venue_id);
    Ok(Redirect::to(&format!("/venues/{}", venue_id)))
}

/// DELETE /venues/:id
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let venue_id = parse_id("Venue", &raw_id)?;
    db::venues::delete(&state.db, venue_id).await?;

    let flash = format!("Venue {} was successfully deleted.", venue_id);
    Ok(Html(pages::home(&[flash])))
}
