//! Activity entity <-> model mapper

use forum_core::entities::{Activity, ActivityKind};
use forum_core::error::DomainError;
use forum_core::value_objects::{ActivityId, PostId, UserId};

use crate::models::ActivityModel;

impl TryFrom<ActivityModel> for Activity {
    type Error = DomainError;

    fn try_from(model: ActivityModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<ActivityKind>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Activity {
            id: ActivityId::new(model.id),
            actor_id: UserId::new(model.actor_id),
            recipient_id: UserId::new(model.recipient_id),
            kind,
            target_id: PostId::new(model.target_id),
            content: model.content,
            is_read: model.is_read,
            created_at: model.created_at,
        })
    }
}
