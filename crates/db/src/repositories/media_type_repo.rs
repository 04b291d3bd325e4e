//! Repository for the `media_types` table.

use reviewhub_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::media_type::{CreateMediaType, MediaType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides create and lookup operations for media types.
pub struct MediaTypeRepo;

impl MediaTypeRepo {
    /// Insert a new media type, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateMediaType,
    ) -> Result<MediaType, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_types (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaType>(&query)
            .bind(&input.name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a media type by internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<MediaType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_types WHERE id = $1");
        sqlx::query_as::<_, MediaType>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a media type by exact name (case-sensitive).
    ///
    /// Names are not unique; the oldest matching row wins.
    pub async fn find_by_name(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<Option<MediaType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM media_types WHERE name = $1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, MediaType>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
    }
}
