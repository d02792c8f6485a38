//! Test fixtures and response shapes
//!
//! Request bodies and the subset of response fields the tests inspect.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixed with the process id so reruns against the same database do not collide.
pub fn unique_suffix() -> String {
    format!("{}_{}", std::process::id(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Test post {}", unique_suffix()),
            content: "Integration test body".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn tagged(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            ..Self::unique()
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub tags: Vec<String>,
}

/// Post listing page
#[derive(Debug, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub sort: String,
}

/// Tag with its post count
#[derive(Debug, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}

/// Tag listing
#[derive(Debug, Deserialize)]
pub struct TagListResponse {
    pub tags: Vec<TagResponse>,
}

/// Post detail response
#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub user_action: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub like_count: i64,
}

/// Reaction response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub success: bool,
    pub like_count: i64,
    pub dislike_count: i64,
    pub user_action: String,
}

/// Activity actor
#[derive(Debug, Deserialize)]
pub struct ActorResponse {
    pub id: i64,
    pub username: Option<String>,
}

/// Notification or history entry
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub actor: ActorResponse,
    pub kind: String,
    pub target_id: i64,
    pub message: String,
    pub is_read: bool,
}

/// Notification feed response
#[derive(Debug, Deserialize)]
pub struct NotificationFeedResponse {
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: i64,
}

/// Unread count response
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Liked posts response
#[derive(Debug, Deserialize)]
pub struct LikedPostsResponse {
    pub post_ids: Vec<i64>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
