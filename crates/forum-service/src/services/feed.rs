//! Notification feed service
//!
//! Read model over the activity table. The notification feed only contains
//! rows addressed to the user by someone else; history contains everything the
//! user did.

use std::collections::HashMap;

use forum_core::entities::Activity;
use forum_core::value_objects::{ActivityId, PostId, UserId};
use forum_core::DomainError;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Notifications addressed to `user_id` by other users, newest first
    #[instrument(skip(self))]
    pub async fn list_for_recipient(
        &self,
        user_id: UserId,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let activities = self.ctx.activity_repo().find_for_recipient(user_id).await?;
        self.render(activities).await
    }

    /// Unread notifications addressed to `user_id` by other users
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: UserId) -> ServiceResult<i64> {
        Ok(self.ctx.activity_repo().count_unread(user_id).await?)
    }

    /// Mark every unread notification as read; safe to repeat
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: UserId) -> ServiceResult<u64> {
        let marked = self.ctx.activity_repo().mark_all_read(user_id).await?;
        if marked > 0 {
            info!(user_id = %user_id, marked, "Notifications marked as read");
        }
        Ok(marked)
    }

    /// Mark notifications read up to the newest one the user has been shown
    #[instrument(skip(self))]
    pub async fn mark_read_up_to(&self, user_id: UserId, newest: ActivityId) -> ServiceResult<u64> {
        let marked = self.ctx.activity_repo().mark_read_up_to(user_id, newest).await?;
        if marked > 0 {
            info!(user_id = %user_id, newest = %newest, marked, "Notifications marked as read");
        }
        Ok(marked)
    }

    /// Delete a notification on behalf of its recipient
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ActivityId, requesting_user: UserId) -> ServiceResult<()> {
        let activity = self
            .ctx
            .activity_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotificationNotFound(id))?;

        if activity.recipient_id != requesting_user {
            return Err(DomainError::NotNotificationRecipient.into());
        }

        self.ctx.activity_repo().delete(id).await?;

        info!(notification_id = %id, user_id = %requesting_user, "Notification deleted");

        Ok(())
    }

    /// Everything the user did, including self-addressed history rows
    #[instrument(skip(self))]
    pub async fn list_history(&self, user_id: UserId) -> ServiceResult<Vec<NotificationResponse>> {
        let activities = self.ctx.activity_repo().find_by_actor(user_id).await?;
        self.render(activities).await
    }

    /// Posts the user currently likes
    #[instrument(skip(self))]
    pub async fn liked_post_ids(&self, user_id: UserId) -> ServiceResult<Vec<PostId>> {
        Ok(self.ctx.reaction_store().liked_post_ids(user_id).await?)
    }

    async fn render(&self, activities: Vec<Activity>) -> ServiceResult<Vec<NotificationResponse>> {
        let usernames = self.usernames(&activities).await?;
        Ok(activities
            .into_iter()
            .map(|activity| NotificationResponse::render(activity, &usernames))
            .collect())
    }

    async fn usernames(&self, activities: &[Activity]) -> ServiceResult<HashMap<UserId, String>> {
        let mut actor_ids: Vec<UserId> = activities.iter().map(|a| a.actor_id).collect();
        actor_ids.sort_unstable();
        actor_ids.dedup();

        if actor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(self.ctx.identity().usernames(&actor_ids).await?)
    }
}

/// Mark the notifications the user was just shown as read, in the background
///
/// `newest` is the highest id in the listed feed. Failures are logged only.
/// The returned handle may be dropped.
pub fn spawn_mark_read(ctx: ServiceContext, user_id: UserId, newest: ActivityId) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = FeedService::new(&ctx).mark_read_up_to(user_id, newest).await {
            warn!(error = %e, user_id = %user_id, "Background mark-as-read failed");
        }
    })
}
