//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// GET    /{id}/reviews    -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/reviews", get(user::list_reviews))
}
