//! Path parameter extractors
//!
//! Type-safe extraction of identifiers and reaction routes from path parameters.

use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::{DomainError, ReactionAction, Subject, SubjectKind};
use serde::Deserialize;

use crate::response::ApiError;

/// Extract a single typed identifier from a path parameter
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path(format!("Invalid id: {raw}")))
    }
}

/// Path parameters for `/reaction/:subject_type/:id/:action`
#[derive(Debug, Deserialize)]
pub struct ReactionPath {
    pub subject_type: String,
    pub id: String,
    pub action: String,
}

impl ReactionPath {
    /// Parse the subject kind and id into a subject
    pub fn subject(&self) -> Result<Subject, ApiError> {
        let kind = self
            .subject_type
            .parse::<SubjectKind>()
            .map_err(DomainError::from)?;
        let id = self
            .id
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::invalid_path("Invalid subject id format"))?;
        Ok(Subject::from_parts(kind, id))
    }

    /// Parse the reaction action
    pub fn action(&self) -> Result<ReactionAction, ApiError> {
        Ok(self
            .action
            .parse::<ReactionAction>()
            .map_err(DomainError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::{CommentId, PostId};

    fn path(subject_type: &str, id: &str, action: &str) -> ReactionPath {
        ReactionPath {
            subject_type: subject_type.to_string(),
            id: id.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn test_reaction_path_parses() {
        let p = path("post", "7", "like");
        assert_eq!(p.subject().unwrap(), Subject::Post(PostId::new(7)));
        assert_eq!(p.action().unwrap(), ReactionAction::Like);

        let p = path("comment", "3", "remove");
        assert_eq!(p.subject().unwrap(), Subject::Comment(CommentId::new(3)));
        assert_eq!(p.action().unwrap(), ReactionAction::Remove);
    }

    #[test]
    fn test_reaction_path_rejects_bad_parts() {
        assert_eq!(
            path("thread", "1", "like").subject().unwrap_err().error_code(),
            "INVALID_SUBJECT_TYPE"
        );
        assert_eq!(
            path("post", "abc", "like").subject().unwrap_err().error_code(),
            "INVALID_PATH_PARAMETER"
        );
        assert_eq!(
            path("post", "0", "like").subject().unwrap_err().error_code(),
            "INVALID_PATH_PARAMETER"
        );
        assert_eq!(
            path("post", "1", "love").action().unwrap_err().error_code(),
            "INVALID_ACTION"
        );
    }
}
