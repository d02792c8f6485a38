//! Tag entity
//!
//! Tags are created on first use by a post and outlive the posts that
//! carried them.

use crate::error::DomainError;
use crate::value_objects::TagId;

/// Tags a single post may carry
pub const MAX_TAGS_PER_POST: usize = 10;
/// Longest tag name, in characters
pub const MAX_TAG_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Posts currently carrying the tag
    pub post_count: i64,
}

/// Canonical tag set for a post: trimmed, lowercased, deduplicated and sorted
///
/// # Errors
/// Returns a validation error when a tag is too long or there are too many.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, DomainError> {
    let mut tags: Vec<String> = raw
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    tags.sort_unstable();
    tags.dedup();

    if let Some(long) = tags.iter().find(|t| t.chars().count() > MAX_TAG_LENGTH) {
        return Err(DomainError::ValidationError(format!(
            "Tag '{long}' is longer than {MAX_TAG_LENGTH} characters"
        )));
    }
    if tags.len() > MAX_TAGS_PER_POST {
        return Err(DomainError::ValidationError(format!(
            "A post can carry at most {MAX_TAGS_PER_POST} tags"
        )));
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        let tags = normalize_tags(&[" Rust ", "async", "rust", "", "  "]).unwrap();
        assert_eq!(tags, vec!["async".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_normalize_rejects_long_tag() {
        let long = "x".repeat(MAX_TAG_LENGTH + 1);
        let err = normalize_tags(&[long]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_normalize_rejects_too_many_tags() {
        let many: Vec<String> = (0..=MAX_TAGS_PER_POST).map(|i| format!("t{i}")).collect();
        assert!(normalize_tags(&many).unwrap_err().is_validation());

        // Duplicates collapse before the count is checked
        let repeated = vec!["same"; MAX_TAGS_PER_POST + 5];
        assert_eq!(normalize_tags(&repeated).unwrap(), vec!["same".to_string()]);
    }
}
