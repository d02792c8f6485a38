//! Post entity <-> model mapper

use forum_core::entities::{Post, PostStatus};
use forum_core::value_objects::{PostId, ReactionCounts, UserId};

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            author_id: UserId::new(model.author_id),
            title: model.title,
            content: model.content,
            status: PostStatus::from_stored(&model.status),
            counts: ReactionCounts::new(model.like_count, model.dislike_count),
            tags: model.tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
