//! Repository for the `reviews` table.

use reviewhub_core::types::DbId;
use sqlx::{Connection, SqliteConnection};

use crate::models::review::{CreateReview, Review, ReviewRow};

/// Columns selected into a [`ReviewRow`]. Expects the aliases
/// `r`, `m`, `mt`, `a`, `u`.
const COLUMNS: &str = "r.id, r.media_id, r.user_id, r.rating, r.review, \
    m.title AS media_title, m.media_type_id, m.author_id AS media_author_id, \
    mt.name AS media_type_name, a.name AS author_name, a.alive AS author_alive, \
    u.name AS user_name, u.age AS user_age";

/// Join clause shared by every review read.
const FROM_JOINED: &str = "FROM reviews r
     JOIN media m ON m.id = r.media_id
     JOIN media_types mt ON mt.id = m.media_type_id
     LEFT JOIN authors a ON a.id = m.author_id
     JOIN users u ON u.id = r.user_id";

/// Provides create and lookup operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning it with media and user resolved.
    ///
    /// Unknown `media_id` / `user_id` values violate a foreign key and
    /// surface as a database error.
    ///
    /// The insert and the read-back run in one transaction; a failed
    /// read-back rolls the insert back.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let mut tx = conn.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO reviews (media_id, user_id, rating, review)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.media_id)
        .bind(input.user_id)
        .bind(input.rating)
        .bind(&input.review)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE r.id = $1");
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Find a review by internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE r.id = $1");
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Review::from))
    }

    /// List all reviews written by a user, in insertion order.
    ///
    /// Returns an empty list both for a user without reviews and for an
    /// unknown user; existence is checked by the caller.
    pub async fn list_by_user(
        conn: &mut SqliteConnection,
        user_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} {FROM_JOINED} WHERE r.user_id = $1 ORDER BY r.id ASC");
        let rows = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }
}
