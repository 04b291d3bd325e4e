//! Author entity model and DTOs.

use reviewhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub alive: bool,
}

/// DTO for creating a new author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub alive: bool,
}
