//! Show pages: listing, create, delete

use axum::{
    extract::{Path, State},
    response::Html,
};
use fyyur_common::time::{self, format_start_time};
use fyyur_common::{Error, FormData, ShowForm};

use super::{parse_id, FormBody};
use crate::error::ApiResult;
use crate::ui::{forms, pages};
use crate::{db, views, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let shows = views::show_listing(&state.db).await?;
    Ok(Html(pages::shows(&shows)))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    let values = FormData::from_pairs(vec![(
        "start_time".to_string(),
        format_start_time(time::now()),
    )]);
    Html(forms::show_form(&values))
}

/// POST /shows/create
///
/// A show whose artist or venue does not exist is a bad request.
pub async fn create_show(
    State(state): State<AppState>,
    FormBody(data): FormBody,
) -> ApiResult<Html<String>> {
    let form = ShowForm::validate(&data, time::now()).map_err(Error::from)?;

    let show_id = db::shows::create(&state.db, &form).await?;

    let flash = format!("Show {} was successfully listed.", show_id);
    Ok(Html(pages::home(&[flash])))
}

/// DELETE /shows/:id
pub async fn delete_show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let show_id = parse_id("Show", &raw_id)?;
    db::shows::delete(&state.db, show_id).await?;

    let flash = format!("Show {} was successfully deleted.", show_id);
    Ok(Html(pages::home(&[flash])))
}
