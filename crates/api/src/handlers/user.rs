//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reviewhub_core::types::DbId;
use reviewhub_core::validation;
use reviewhub_db::models::review::Review;
use reviewhub_db::models::user::{CreateUser, User};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    validation::validate_user_name(&input.name)?;
    let user = state.catalog().await?.create_user(&input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = state.catalog().await?.get_user(id).await?;
    Ok(Json(user))
}

/// GET /api/v1/users/{id}/reviews
///
/// Returns `[]` for a user who has not reviewed anything and 404 for an
/// unknown user.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.catalog().await?.get_user_reviews(id).await?;
    Ok(Json(reviews))
}
