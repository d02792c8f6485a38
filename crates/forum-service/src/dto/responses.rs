//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::entities::{ActivityKind, PostStatus};
use forum_core::value_objects::{ActivityId, CommentId, PostId, PostSort, TagId, UserId};
use serde::Serialize;

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a reaction request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub success: bool,
    pub like_count: i64,
    pub dislike_count: i64,
    /// One of `like`, `dislike`, `none`
    pub user_action: &'static str,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Who performed an activity
#[derive(Debug, Clone, Serialize)]
pub struct ActorResponse {
    pub id: UserId,
    /// `None` when the user row no longer exists
    pub username: Option<String>,
}

/// Rendered activity, used for both the notification feed and history
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: ActivityId,
    pub actor: ActorResponse,
    pub kind: ActivityKind,
    pub target_id: PostId,
    pub content: String,
    /// `"{actor} {content}"`
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Notification list together with the unread count at read time
#[derive(Debug, Clone, Serialize)]
pub struct NotificationFeedResponse {
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkReadResponse {
    /// Rows changed from unread to read
    pub marked: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikedPostsResponse {
    pub post_ids: Vec<PostId>,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub like_count: i64,
    pub dislike_count: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the post listing
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub sort: PostSort,
    pub page: u32,
    pub per_page: u32,
}

/// Post with its comments and the viewer's reaction
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub user_action: &'static str,
}

// ============================================================================
// Tag Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: TagId,
    pub name: String,
    pub post_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<TagResponse>,
}

/// A tag with the published posts carrying it, newest first
#[derive(Debug, Clone, Serialize)]
pub struct TagPostsResponse {
    pub tag: TagResponse,
    pub posts: Vec<PostResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
