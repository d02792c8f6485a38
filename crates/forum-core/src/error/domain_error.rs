//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{
    ActivityId, CommentId, InvalidReactionAction, PostId, Subject, TagId, UnknownSubjectKind, UserId,
};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Notification not found: {0}")]
    NotificationNotFound(ActivityId),

    #[error("Tag not found: {0}")]
    TagNotFound(TagId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction action: {0}")]
    InvalidReactionAction(String),

    #[error("Invalid subject type: {0}")]
    InvalidSubjectType(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the recipient of this notification")]
    NotNotificationRecipient,

    #[error("Not post author")]
    NotPostAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error matching the subject's kind
    pub fn subject_not_found(subject: Subject) -> Self {
        match subject {
            Subject::Post(id) => Self::PostNotFound(id),
            Subject::Comment(id) => Self::CommentNotFound(id),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::TagNotFound(_) => "UNKNOWN_TAG",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionAction(_) => "INVALID_ACTION",
            Self::InvalidSubjectType(_) => "INVALID_SUBJECT_TYPE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotNotificationRecipient => "NOT_NOTIFICATION_RECIPIENT",
            Self::NotPostAuthor => "NOT_POST_AUTHOR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::NotificationNotFound(_)
                | Self::TagNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionAction(_)
                | Self::InvalidSubjectType(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotNotificationRecipient | Self::NotPostAuthor)
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

impl From<InvalidReactionAction> for DomainError {
    fn from(err: InvalidReactionAction) -> Self {
        Self::InvalidReactionAction(err.0)
    }
}

impl From<UnknownSubjectKind> for DomainError {
    fn from(err: UnknownSubjectKind) -> Self {
        Self::InvalidSubjectType(err.0)
    }
}
