use std::fmt;

use crate::types::DbId;

/// The key a failed lookup was searching by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Primary key lookup.
    Id(DbId),
    /// Equality lookup on a `name` column.
    Name(String),
    /// Works of the given author, as used by the highest-rated-media query.
    ///
    /// A missing author and an author without reviewed works both end up
    /// here; callers cannot tell them apart.
    Author(DbId),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id {id}"),
            LookupKey::Name(name) => write!(f, "name '{name}'"),
            LookupKey::Author(id) => write!(f, "author id {id}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}", not_found_message(.entity, .key))]
    NotFound {
        entity: &'static str,
        key: LookupKey,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a primary key miss.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: LookupKey::Id(id),
        }
    }

    /// Shorthand for a miss on a `name` lookup.
    pub fn not_found_by_name(entity: &'static str, name: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            key: LookupKey::Name(name.into()),
        }
    }

    /// The author has no media with at least one review (or does not exist).
    pub fn no_rated_media(author_id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Media",
            key: LookupKey::Author(author_id),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

fn not_found_message(entity: &str, key: &LookupKey) -> String {
    match key {
        LookupKey::Author(author_id) => {
            format!("No {} found for author with id {author_id}", entity.to_lowercase())
        }
        other => format!("{entity} with {other} not found"),
    }
}
