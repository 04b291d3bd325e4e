//! Handlers for the `/authors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reviewhub_core::types::DbId;
use reviewhub_core::validation;
use reviewhub_db::models::author::{Author, CreateAuthor};
use reviewhub_db::models::media::Media;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/authors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    validation::validate_author_name(&input.name)?;
    let author = state.catalog().await?.create_author(&input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /api/v1/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    let author = state.catalog().await?.get_author(id).await?;
    Ok(Json(author))
}

/// GET /api/v1/authors/{id}/highest-rated-media
///
/// 404 when the author has no reviewed media, including when the author
/// does not exist.
pub async fn highest_rated_media(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Media>> {
    let media = state.catalog().await?.get_author_highest_rated_media(id).await?;
    Ok(Json(media))
}
