//! Route definitions for the `/media` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(media::create))
        .route("/{id}", get(media::get_by_id))
}
