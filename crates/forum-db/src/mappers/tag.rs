//! Tag entity <-> model mapper

use forum_core::entities::Tag;
use forum_core::value_objects::TagId;

use crate::models::TagModel;

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: TagId::new(model.id),
            name: model.name,
            post_count: model.post_count,
        }
    }
}
