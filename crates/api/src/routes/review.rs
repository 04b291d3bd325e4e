//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(review::create))
        .route("/{id}", get(review::get_by_id))
}
