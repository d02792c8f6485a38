//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Activity, NewActivity};
use forum_core::traits::{ActivityRepository, RepoResult};
use forum_core::value_objects::{ActivityId, UserId};

use crate::models::ActivityModel;

use super::error::map_db_error;

const ACTIVITY_COLUMNS: &str =
    "id, actor_id, recipient_id, kind, target_id, content, is_read, created_at";

fn into_activities(rows: Vec<ActivityModel>) -> RepoResult<Vec<Activity>> {
    rows.into_iter().map(Activity::try_from).collect()
}

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn create(&self, activity: &NewActivity) -> RepoResult<Activity> {
        let sql = format!(
            r"
            INSERT INTO activities (actor_id, recipient_id, kind, target_id, content, is_read)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ACTIVITY_COLUMNS}
            "
        );

        let row = sqlx::query_as::<_, ActivityModel>(&sql)
            .bind(activity.actor_id.into_inner())
            .bind(activity.recipient_id.into_inner())
            .bind(activity.kind.as_str())
            .bind(activity.target_id.into_inner())
            .bind(&activity.content)
            .bind(activity.is_read)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Activity::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        let sql = format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = $1");

        let row = sqlx::query_as::<_, ActivityModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(Activity::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_for_recipient(&self, recipient_id: UserId) -> RepoResult<Vec<Activity>> {
        let sql = format!(
            r"
            SELECT {ACTIVITY_COLUMNS}
            FROM activities
            WHERE recipient_id = $1 AND actor_id <> $1
            ORDER BY created_at DESC, id DESC
            "
        );

        let rows = sqlx::query_as::<_, ActivityModel>(&sql)
            .bind(recipient_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_activities(rows)
    }

    #[instrument(skip(self))]
    async fn count_unread(&self, recipient_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM activities
            WHERE recipient_id = $1 AND actor_id <> $1 AND NOT is_read
            ",
        )
        .bind(recipient_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, recipient_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE activities
            SET is_read = TRUE
            WHERE recipient_id = $1 AND actor_id <> $1 AND NOT is_read
            ",
        )
        .bind(recipient_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn mark_read_up_to(&self, recipient_id: UserId, newest: ActivityId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE activities
            SET is_read = TRUE
            WHERE recipient_id = $1 AND actor_id <> $1 AND NOT is_read AND id <= $2
            ",
        )
        .bind(recipient_id.into_inner())
        .bind(newest.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_by_actor(&self, actor_id: UserId) -> RepoResult<Vec<Activity>> {
        let sql = format!(
            r"
            SELECT {ACTIVITY_COLUMNS}
            FROM activities
            WHERE actor_id = $1
            ORDER BY created_at DESC, id DESC
            "
        );

        let rows = sqlx::query_as::<_, ActivityModel>(&sql)
            .bind(actor_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_activities(rows)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ActivityId) -> RepoResult<()> {
        sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
