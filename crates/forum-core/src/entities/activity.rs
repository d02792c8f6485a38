//! Activity entity - a notification or a personal history entry
//!
//! Rows are written once by the emitter. The only mutation afterwards is the
//! one-way unread to read transition.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ActivityId, Polarity, PostId, UserId};

/// Display name used when the actor no longer exists
pub const UNKNOWN_ACTOR: &str = "Unknown user";

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Comment,
    Like,
    Dislike,
    CreatePost,
    UpdateProfile,
    DeletePost,
}

impl ActivityKind {
    /// Stored string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::CreatePost => "create_post",
            Self::UpdateProfile => "update_profile",
            Self::DeletePost => "delete_post",
        }
    }
}

impl From<Polarity> for ActivityKind {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Like => Self::Like,
            Polarity::Dislike => Self::Dislike,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity kind: {0}")]
pub struct UnknownActivityKind(pub String);

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comment" => Ok(Self::Comment),
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "create_post" => Ok(Self::CreatePost),
            "update_profile" => Ok(Self::UpdateProfile),
            "delete_post" => Ok(Self::DeletePost),
            other => Err(UnknownActivityKind(other.to_string())),
        }
    }
}

/// Stored activity row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub actor_id: UserId,
    pub recipient_id: UserId,
    pub kind: ActivityKind,
    /// Always a post id, also for comment and comment-reaction activities
    pub target_id: PostId,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// True for rows addressed to someone other than the actor
    #[inline]
    pub fn is_notification(&self) -> bool {
        self.actor_id != self.recipient_id
    }

    /// Human readable line: `"{actor} {content}"`
    pub fn message(&self, actor_name: Option<&str>) -> String {
        format!("{} {}", actor_name.unwrap_or(UNKNOWN_ACTOR), self.content)
    }
}

/// Activity about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub actor_id: UserId,
    pub recipient_id: UserId,
    pub kind: ActivityKind,
    pub target_id: PostId,
    pub content: String,
    pub is_read: bool,
}

impl NewActivity {
    /// Unread notification for another user
    pub fn notification(
        actor_id: UserId,
        recipient_id: UserId,
        kind: ActivityKind,
        target_id: PostId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            actor_id,
            recipient_id,
            kind,
            target_id,
            content: content.into(),
            is_read: false,
        }
    }

    /// Self-addressed entry for the actor's own history, stored already read
    pub fn history(
        actor_id: UserId,
        kind: ActivityKind,
        target_id: PostId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            actor_id,
            recipient_id: actor_id,
            kind,
            target_id,
            content: content.into(),
            is_read: true,
        }
    }
}
