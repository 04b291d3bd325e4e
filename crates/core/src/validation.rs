//! Boundary validation for catalog request payloads.
//!
//! The limits mirror the text column widths of the catalog schema. The
//! persistence layer assumes its inputs already passed these checks.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length (in characters) of a user name.
pub const MAX_USER_NAME_LEN: usize = 30;
/// Maximum length (in characters) of a media type name.
pub const MAX_MEDIA_TYPE_NAME_LEN: usize = 30;
/// Maximum length (in characters) of an author name.
pub const MAX_AUTHOR_NAME_LEN: usize = 150;
/// Maximum length (in characters) of a media title.
pub const MAX_MEDIA_TITLE_LEN: usize = 150;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a short text field: at most `max_len` characters. Empty values
/// are accepted.
pub fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

pub fn validate_user_name(name: &str) -> Result<(), CoreError> {
    validate_text("name", name, MAX_USER_NAME_LEN)
}

pub fn validate_media_type_name(name: &str) -> Result<(), CoreError> {
    validate_text("name", name, MAX_MEDIA_TYPE_NAME_LEN)
}

pub fn validate_author_name(name: &str) -> Result<(), CoreError> {
    validate_text("name", name, MAX_AUTHOR_NAME_LEN)
}

pub fn validate_media_title(title: &str) -> Result<(), CoreError> {
    validate_text("title", title, MAX_MEDIA_TITLE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_within_limit() {
        assert!(validate_user_name("John Doe").is_ok());
        assert!(validate_media_title("The Great Gatsby").is_ok());
        assert!(validate_text("name", &"a".repeat(30), 30).is_ok());
    }

    #[test]
    fn accepts_empty_and_blank_text() {
        assert!(validate_author_name("").is_ok());
        assert!(validate_media_type_name("   ").is_ok());
    }

    #[test]
    fn rejects_text_over_limit() {
        let err = validate_user_name(&"x".repeat(MAX_USER_NAME_LEN + 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: name must be at most 30 characters (got 31)"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 30 two-byte characters stay within the 30 character limit.
        assert!(validate_media_type_name(&"é".repeat(30)).is_ok());
    }

    #[test]
    fn author_and_title_allow_longer_values() {
        let long = "y".repeat(120);
        assert!(validate_author_name(&long).is_ok());
        assert!(validate_media_title(&long).is_ok());
        assert!(validate_user_name(&long).is_err());
    }
}
