//! Review model and DTOs.

use reviewhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::media::{Media, MediaRow};
use crate::models::user::User;

/// A review with its media (fully resolved) and user attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: DbId,
    pub media_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub review: String,
    pub media: Media,
    pub user: User,
}

/// Flat row from `reviews` joined with `media`, `media_types`, `authors`
/// and `users`. Joined columns are prefixed to avoid clashing with the
/// review's own columns.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: DbId,
    pub media_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub review: String,
    pub media_title: String,
    pub media_type_id: DbId,
    pub media_author_id: Option<DbId>,
    pub media_type_name: String,
    pub author_name: Option<String>,
    pub author_alive: Option<bool>,
    pub user_name: String,
    pub user_age: Option<i32>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        let media = Media::from(MediaRow {
            id: row.media_id,
            title: row.media_title,
            media_type_id: row.media_type_id,
            author_id: row.media_author_id,
            media_type_name: row.media_type_name,
            author_name: row.author_name,
            author_alive: row.author_alive,
        });
        let user = User {
            id: row.user_id,
            name: row.user_name,
            age: row.user_age,
        };
        Review {
            id: row.id,
            media_id: row.media_id,
            user_id: row.user_id,
            rating: row.rating,
            review: row.review,
            media,
            user,
        }
    }
}

/// DTO for creating a new review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub media_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub review: String,
}
