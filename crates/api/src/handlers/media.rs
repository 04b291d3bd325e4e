//! Handlers for the `/media` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reviewhub_core::types::DbId;
use reviewhub_core::validation;
use reviewhub_db::models::media::{CreateMedia, Media};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/media
///
/// Unknown `media_type_id` / `author_id` values are not checked up front;
/// the database rejects them and the request fails with 500.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMedia>,
) -> AppResult<(StatusCode, Json<Media>)> {
    validation::validate_media_title(&input.title)?;
    let media = state.catalog().await?.create_media(&input).await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/media/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Media>> {
    let media = state.catalog().await?.get_media(id).await?;
    Ok(Json(media))
}
