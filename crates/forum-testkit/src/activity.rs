//! In-memory ActivityRepository

use async_trait::async_trait;
use chrono::Utc;

use forum_core::entities::{Activity, NewActivity};
use forum_core::traits::{ActivityRepository, RepoResult};
use forum_core::value_objects::{ActivityId, UserId};

use crate::store::MemoryStore;

/// Newest first; ids break ties between rows created in the same instant
fn newest_first(mut rows: Vec<Activity>) -> Vec<Activity> {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    rows
}

impl MemoryStore {
    async fn mark_read_where(&self, recipient_id: UserId, pick: impl Fn(&Activity) -> bool) -> u64 {
        let mut state = self.activities.lock().await;
        let mut changed = 0;
        for activity in &mut state.rows {
            let addressed = activity.recipient_id == recipient_id && activity.actor_id != recipient_id;
            if addressed && !activity.is_read && pick(activity) {
                activity.is_read = true;
                changed += 1;
            }
        }
        changed
    }
}

#[async_trait]
impl ActivityRepository for MemoryStore {
    async fn create(&self, activity: &NewActivity) -> RepoResult<Activity> {
        self.check_activity_write()?;

        let mut state = self.activities.lock().await;
        state.next_id += 1;
        let created = Activity {
            id: ActivityId::new(state.next_id),
            actor_id: activity.actor_id,
            recipient_id: activity.recipient_id,
            kind: activity.kind,
            target_id: activity.target_id,
            content: activity.content.clone(),
            is_read: activity.is_read,
            created_at: Utc::now(),
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        let state = self.activities.lock().await;
        Ok(state.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn find_for_recipient(&self, recipient_id: UserId) -> RepoResult<Vec<Activity>> {
        let state = self.activities.lock().await;
        Ok(newest_first(
            state
                .rows
                .iter()
                .filter(|a| a.recipient_id == recipient_id && a.actor_id != recipient_id)
                .cloned()
                .collect(),
        ))
    }

    async fn count_unread(&self, recipient_id: UserId) -> RepoResult<i64> {
        let state = self.activities.lock().await;
        let count = state
            .rows
            .iter()
            .filter(|a| a.recipient_id == recipient_id && a.actor_id != recipient_id)
            .filter(|a| !a.is_read)
            .count();
        Ok(count as i64)
    }

    async fn mark_all_read(&self, recipient_id: UserId) -> RepoResult<u64> {
        Ok(self.mark_read_where(recipient_id, |_| true).await)
    }

    async fn mark_read_up_to(&self, recipient_id: UserId, newest: ActivityId) -> RepoResult<u64> {
        Ok(self.mark_read_where(recipient_id, |a| a.id <= newest).await)
    }

    async fn find_by_actor(&self, actor_id: UserId) -> RepoResult<Vec<Activity>> {
        let state = self.activities.lock().await;
        Ok(newest_first(
            state
                .rows
                .iter()
                .filter(|a| a.actor_id == actor_id)
                .cloned()
                .collect(),
        ))
    }

    async fn delete(&self, id: ActivityId) -> RepoResult<()> {
        self.activities.lock().await.rows.retain(|a| a.id != id);
        Ok(())
    }
}
