//! Media (a single work) model and DTOs.

use reviewhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::author::Author;
use crate::models::media_type::MediaType;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A media item with its media type and author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub id: DbId,
    pub title: String,
    pub media_type_id: DbId,
    pub author_id: Option<DbId>,
    pub media_type: MediaType,
    pub author: Option<Author>,
}

/// Flat row produced by joining `media` with `media_types` and `authors`.
///
/// The author columns are all `NULL` when the media has no author.
#[derive(Debug, Clone, FromRow)]
pub struct MediaRow {
    pub id: DbId,
    pub title: String,
    pub media_type_id: DbId,
    pub author_id: Option<DbId>,
    pub media_type_name: String,
    pub author_name: Option<String>,
    pub author_alive: Option<bool>,
}

impl From<MediaRow> for Media {
    fn from(row: MediaRow) -> Self {
        let author = match (row.author_id, row.author_name, row.author_alive) {
            (Some(id), Some(name), Some(alive)) => Some(Author { id, name, alive }),
            _ => None,
        };
        Media {
            id: row.id,
            title: row.title,
            media_type_id: row.media_type_id,
            author_id: row.author_id,
            media_type: MediaType {
                id: row.media_type_id,
                name: row.media_type_name,
            },
            author,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new media item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub title: String,
    pub media_type_id: DbId,
    pub author_id: Option<DbId>,
}
