//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use std::collections::HashMap;

use forum_core::entities::{Activity, Comment, Post, Tag};
use forum_core::UserId;

use crate::services::ReactionOutcome;

use super::responses::{
    ActorResponse, CommentResponse, NotificationResponse, PostResponse, ReactionResponse,
    TagResponse,
};

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&ReactionOutcome> for ReactionResponse {
    fn from(outcome: &ReactionOutcome) -> Self {
        Self {
            success: true,
            like_count: outcome.counts.like_count,
            dislike_count: outcome.counts.dislike_count,
            user_action: outcome.state().user_action(),
        }
    }
}

// ============================================================================
// Activity Mappers
// ============================================================================

impl NotificationResponse {
    /// Render an activity using a pre-fetched username map
    pub fn render(activity: Activity, usernames: &HashMap<UserId, String>) -> Self {
        let username = usernames.get(&activity.actor_id).cloned();
        let message = activity.message(username.as_deref());
        Self {
            id: activity.id,
            actor: ActorResponse {
                id: activity.actor_id,
                username,
            },
            kind: activity.kind,
            target_id: activity.target_id,
            content: activity.content,
            message,
            created_at: activity.created_at,
            is_read: activity.is_read,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            title: post.title.clone(),
            content: post.content.clone(),
            status: post.status,
            like_count: post.counts.like_count,
            dislike_count: post.counts.dislike_count,
            tags: post.tags.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

// ============================================================================
// Tag Mappers
// ============================================================================

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            post_count: tag.post_count,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            like_count: comment.counts.like_count,
            dislike_count: comment.counts.dislike_count,
            created_at: comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forum_core::entities::ActivityKind;
    use forum_core::{ActivityId, PostId};

    fn activity(actor: i64) -> Activity {
        Activity {
            id: ActivityId::new(1),
            actor_id: UserId::new(actor),
            recipient_id: UserId::new(2),
            kind: ActivityKind::Comment,
            target_id: PostId::new(10),
            content: "commented on your post".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_uses_actor_username() {
        let usernames = HashMap::from([(UserId::new(1), "alice".to_string())]);
        let view = NotificationResponse::render(activity(1), &usernames);
        assert_eq!(view.message, "alice commented on your post");
        assert_eq!(view.actor.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_render_missing_actor() {
        let view = NotificationResponse::render(activity(9), &HashMap::new());
        assert_eq!(view.message, "Unknown user commented on your post");
        assert!(view.actor.username.is_none());
    }
}
