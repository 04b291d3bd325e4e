pub mod author;
pub mod health;
pub mod media;
pub mod media_type;
pub mod review;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                     create
/// /users/{id}                                get
/// /users/{id}/reviews                        reviews written by the user
///
/// /media-types                               create
/// /media-types/{id}                          get
/// /media-types/by-name/{name}                get by exact name
///
/// /authors                                   create
/// /authors/{id}                              get
/// /authors/{id}/highest-rated-media          best mean rating among the author's works
///
/// /media                                     create
/// /media/{id}                                get
///
/// /reviews                                   create
/// /reviews/{id}                              get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/media-types", media_type::router())
        .nest("/authors", author::router())
        .nest("/media", media::router())
        .nest("/reviews", review::router())
}
