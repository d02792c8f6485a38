//! Reaction entity <-> model mapper

use forum_core::entities::Reaction;
use forum_core::error::DomainError;
use forum_core::value_objects::{
    CommentId, Polarity, PostId, ReactionCounts, Subject, UserId,
};

use crate::models::{CountsModel, ReactionModel};

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let subject = match (model.post_id, model.comment_id) {
            (Some(post_id), None) => Subject::Post(PostId::new(post_id)),
            (None, Some(comment_id)) => Subject::Comment(CommentId::new(comment_id)),
            _ => {
                return Err(DomainError::DatabaseError(
                    "reaction row must reference exactly one subject".to_string(),
                ))
            }
        };

        Ok(Reaction {
            subject,
            user_id: UserId::new(model.user_id),
            polarity: Polarity::from_is_like(model.is_like),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<CountsModel> for ReactionCounts {
    fn from(model: CountsModel) -> Self {
        ReactionCounts::new(model.like_count, model.dislike_count)
    }
}

/// Column values of a subject for insertion into the reactions table
pub(crate) struct SubjectColumns {
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
}

impl From<Subject> for SubjectColumns {
    fn from(subject: Subject) -> Self {
        Self {
            post_id: subject.post_id().map(PostId::into_inner),
            comment_id: subject.comment_id().map(CommentId::into_inner),
        }
    }
}
