//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use forum_core::entities::{NewPost, PostStatus, PostUpdate};
use forum_core::UserId;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "Content must be 1-20000 characters"))]
    pub content: String,

    /// Defaults to published
    #[serde(default)]
    pub status: PostStatus,

    /// Tag names; normalized by the post service
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreatePostRequest {
    /// Tags are taken as given; callers normalize them first
    pub fn into_new_post(self, author_id: UserId) -> NewPost {
        NewPost {
            author_id,
            title: self.title,
            content: self.content,
            status: self.status,
            tags: self.tags,
        }
    }
}

/// Partial post update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 20000, message = "Content must be 1-20000 characters"))]
    pub content: Option<String>,

    pub status: Option<PostStatus>,

    /// Replaces every tag on the post; `[]` clears them
    pub tags: Option<Vec<String>>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            status: req.status,
            tags: req.tags,
        }
    }
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
///
/// The upper length bound is configurable and checked by the comment service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Comment content is required"))]
    pub content: String,
}
