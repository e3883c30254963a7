//! Artist pages: listing, search, detail, create, edit, delete

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use fyyur_common::{time, ArtistForm, Error, FormData};
use tracing::debug;

use super::{parse_id, FormBody, SearchTerm};
use crate::error::{ApiError, ApiResult};
use crate::ui::{forms, pages};
use crate::{db, views, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let artists = views::artist_list(&state.db).await?;
    Ok(Html(pages::artists(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    SearchTerm(term): SearchTerm,
) -> ApiResult<Html<String>> {
    let results = views::search_artists(&state.db, &term, time::now()).await?;
    Ok(Html(pages::search_results("artists", &term, &results)))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist_id = parse_id("Artist", &raw_id)?;
    let detail = views::artist_detail(&state.db, artist_id, time::now()).await?;
    Ok(Html(pages::artist_detail(&detail)))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(forms::artist_form(
        "List a new artist",
        "/artists/create",
        &FormData::default(),
    ))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    FormBody(data): FormBody,
) -> ApiResult<Html<String>> {
    let form = ArtistForm::validate(&data).map_err(Error::from)?;

    let artist_id = db::artists::create(&state.db, &form).await?;

    let flash = format!("Artist {} was successfully listed.", artist_id);
    Ok(Html(pages::home(&[flash])))
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist_id = parse_id("Artist", &raw_id)?;
    let artist = db::artists::load(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist", artist_id))?;

    Ok(Html(forms::artist_form(
        &format!("Edit artist {}", artist.name),
        &format!("/artists/{}/edit", artist_id),
        &forms::artist_values(&artist),
    )))
}

/// POST /artists/:id/edit
///
/// Replaces every field, then redirects to the detail page.
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    FormBody(data): FormBody,
) -> ApiResult<Redirect> {
    let artist_id = parse_id("Artist", &raw_id)?;
    if !db::artists::exists(&state.db, artist_id).await? {
        return Err(ApiError::not_found("Artist", artist_id));
    }

    let form = ArtistForm::validate(&data).map_err(Error::from)?;
    db::artists::update(&state.db, artist_id, &form).await?;

    debug!("Redirecting to artist {}", artist_id);
    Ok(Redirect::to(&format!("/artists/{}", artist_id)))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist_id = parse_id("Artist", &raw_id)?;
    db::artists::delete(&state.db, artist_id).await?;

    let flash = format!("Artist {} was successfully deleted.", artist_id);
    Ok(Html(pages::home(&[flash])))
}
