//! Route definitions for the `/authors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/authors`.
///
/// ```text
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// GET    /{id}/highest-rated-media    -> highest_rated_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(author::create))
        .route("/{id}", get(author::get_by_id))
        .route("/{id}/highest-rated-media", get(author::highest_rated_media))
}
