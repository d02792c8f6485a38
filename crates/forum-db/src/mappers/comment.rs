//! Comment entity <-> model mapper

use forum_core::entities::Comment;
use forum_core::value_objects::{CommentId, PostId, ReactionCounts, UserId};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            post_id: PostId::new(model.post_id),
            author_id: UserId::new(model.author_id),
            content: model.content,
            counts: ReactionCounts::new(model.like_count, model.dislike_count),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
