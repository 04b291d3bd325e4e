//! Repository for the `authors` table.

use reviewhub_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::author::{Author, CreateAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, alive";

/// Provides create and lookup operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateAuthor,
    ) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, alive)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(input.alive)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find an author by internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
