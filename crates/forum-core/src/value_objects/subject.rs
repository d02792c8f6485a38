//! Reaction subjects - the things a user can like or dislike

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::{CommentId, PostId};

/// Kind of subject, as it appears in request paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Post,
    Comment,
}

impl SubjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a subject type is neither `post` nor `comment`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject type: {0}")]
pub struct UnknownSubjectKind(pub String);

impl FromStr for SubjectKind {
    type Err = UnknownSubjectKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" | "posts" => Ok(Self::Post),
            "comment" | "comments" => Ok(Self::Comment),
            other => Err(UnknownSubjectKind(other.to_string())),
        }
    }
}

/// A reactable subject: exactly one post or exactly one comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Subject {
    Post(PostId),
    Comment(CommentId),
}

impl Subject {
    /// Build a subject from a parsed kind and a raw identifier
    pub fn from_parts(kind: SubjectKind, id: i64) -> Self {
        match kind {
            SubjectKind::Post => Self::Post(PostId::new(id)),
            SubjectKind::Comment => Self::Comment(CommentId::new(id)),
        }
    }

    #[inline]
    pub fn kind(&self) -> SubjectKind {
        match self {
            Self::Post(_) => SubjectKind::Post,
            Self::Comment(_) => SubjectKind::Comment,
        }
    }

    /// Raw integer key of the subject row
    #[inline]
    pub fn raw_id(&self) -> i64 {
        match self {
            Self::Post(id) => id.into_inner(),
            Self::Comment(id) => id.into_inner(),
        }
    }

    pub fn post_id(&self) -> Option<PostId> {
        match self {
            Self::Post(id) => Some(*id),
            Self::Comment(_) => None,
        }
    }

    pub fn comment_id(&self) -> Option<CommentId> {
        match self {
            Self::Post(_) => None,
            Self::Comment(id) => Some(*id),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.raw_id())
    }
}

impl From<PostId> for Subject {
    fn from(id: PostId) -> Self {
        Self::Post(id)
    }
}

impl From<CommentId> for Subject {
    fn from(id: CommentId) -> Self {
        Self::Comment(id)
    }
}
