//! Application error types
//!
//! Errors raised outside the domain model: token checks, startup
//! configuration and storage bootstrapping. Domain failures pass through
//! untouched so their codes reach the client.

use forum_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// HTTP status for a domain failure
///
/// Shared by every layer that renders a [`DomainError`], so a missing post is
/// a 404 whether it surfaces from a repository, a service or an extractor.
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_authorization() {
        403
    } else if err.is_validation() {
        400
    } else {
        500
    }
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired => 401,
            Self::Validation(_) => 400,
            Self::Config(_) | Self::Database(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::{ActivityId, PostId};

    #[test]
    fn test_token_errors_are_unauthorized() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
    }

    #[test]
    fn test_startup_errors_are_server_errors() {
        assert_eq!(AppError::Config("bad port".into()).status_code(), 500);
        assert_eq!(AppError::Database("refused".into()).error_code(), "DATABASE_ERROR");

        let err = AppError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_domain_status() {
        assert_eq!(domain_status(&DomainError::PostNotFound(PostId::new(1))), 404);
        assert_eq!(domain_status(&DomainError::NotPostAuthor), 403);
        assert_eq!(domain_status(&DomainError::InvalidSubjectType("x".into())), 400);
        assert_eq!(domain_status(&DomainError::DatabaseError("x".into())), 500);
    }

    #[test]
    fn test_domain_errors_keep_their_codes() {
        let err = AppError::from(DomainError::NotificationNotFound(ActivityId::new(3)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_NOTIFICATION");
        assert_eq!(err.to_string(), "Notification not found: 3");
    }
}
