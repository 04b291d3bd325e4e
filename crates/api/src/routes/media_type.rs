//! Route definitions for the `/media-types` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::media_type;
use crate::state::AppState;

/// Routes mounted at `/media-types`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// GET    /by-name/{name}    -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(media_type::create))
        .route("/{id}", get(media_type::get_by_id))
        .route("/by-name/{name}", get(media_type::get_by_name))
}
