//! Handlers for the `/media-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reviewhub_core::types::DbId;
use reviewhub_core::validation;
use reviewhub_db::models::media_type::{CreateMediaType, MediaType};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/media-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMediaType>,
) -> AppResult<(StatusCode, Json<MediaType>)> {
    validation::validate_media_type_name(&input.name)?;
    let media_type = state.catalog().await?.create_media_type(&input).await?;
    Ok((StatusCode::CREATED, Json(media_type)))
}

/// GET /api/v1/media-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MediaType>> {
    let media_type = state.catalog().await?.get_media_type(id).await?;
    Ok(Json(media_type))
}

/// GET /api/v1/media-types/by-name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MediaType>> {
    let media_type = state.catalog().await?.get_media_type_by_name(&name).await?;
    Ok(Json(media_type))
}
