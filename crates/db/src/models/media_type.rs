//! Media type (book, movie, ...) model and DTOs.

use reviewhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media_types` table. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MediaType {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new media type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaType {
    pub name: String,
}
