//! Handlers for the `/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reviewhub_core::types::DbId;
use reviewhub_db::models::review::{CreateReview, Review};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/reviews
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.catalog().await?.create_review(&input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = state.catalog().await?.get_review(id).await?;
    Ok(Json(review))
}
