//! Repository for the `media` table.
//!
//! Every read joins `media_types` and `authors` so callers always receive a
//! fully resolved [`Media`].

use reviewhub_core::types::DbId;
use sqlx::{Connection, SqliteConnection};

use crate::models::media::{CreateMedia, Media, MediaRow};

/// Columns selected into a [`MediaRow`]. Expects the aliases `m`, `mt`, `a`.
const COLUMNS: &str = "m.id, m.title, m.media_type_id, m.author_id, \
    mt.name AS media_type_name, a.name AS author_name, a.alive AS author_alive";

/// Join clause shared by every media read.
const FROM_JOINED: &str = "FROM media m
     JOIN media_types mt ON mt.id = m.media_type_id
     LEFT JOIN authors a ON a.id = m.author_id";

/// Provides create, lookup and ranking operations for media.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media item, returning it with references resolved.
    ///
    /// A `media_type_id` or `author_id` that does not exist is rejected by
    /// the foreign key constraint and surfaces as a database error.
    ///
    /// The insert and the read-back run in one transaction; a failed
    /// read-back rolls the insert back.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateMedia,
    ) -> Result<Media, sqlx::Error> {
        let mut tx = conn.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO media (title, media_type_id, author_id)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.media_type_id)
        .bind(input.author_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE m.id = $1");
        let row = sqlx::query_as::<_, MediaRow>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Find a media item by internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE m.id = $1");
        let row = sqlx::query_as::<_, MediaRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Media::from))
    }

    /// Find the author's media with the highest mean review rating.
    ///
    /// Media without reviews drop out of the inner join, so `None` covers an
    /// unknown author, an author without media, and an author whose media
    /// are all unreviewed. Equal means resolve to the lowest media id.
    ///
    /// Runs as a single statement so the mean is computed by the database
    /// within one consistent read.
    pub async fn find_highest_rated_by_author(
        conn: &mut SqliteConnection,
        author_id: DbId,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED}
             JOIN reviews r ON r.media_id = m.id
             WHERE m.author_id = $1
             GROUP BY m.id, m.title, m.media_type_id, m.author_id, mt.name, a.name, a.alive
             ORDER BY AVG(r.rating) DESC, m.id ASC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, MediaRow>(&query)
            .bind(author_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Media::from))
    }
}
