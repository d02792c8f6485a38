//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentId, PostId, ReactionCounts, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub counts: ReactionCounts,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
}

impl NewComment {
    pub fn new(post_id: PostId, author_id: UserId, content: impl Into<String>) -> Self {
        Self {
            post_id,
            author_id,
            content: content.into(),
        }
    }

    /// Content length in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
