//! PostgreSQL implementation of IdentityStore

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use forum_core::entities::User;
use forum_core::traits::{IdentityStore, RepoResult};
use forum_core::value_objects::{CommentId, PostId, UserId};

use crate::models::UserModel;

use super::error::map_db_error;

#[derive(FromRow)]
struct CommentOwnerRow {
    author_id: i64,
    post_id: i64,
}

#[derive(FromRow)]
struct UsernameRow {
    id: i64,
    username: String,
}

/// PostgreSQL implementation of IdentityStore
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    /// Create a new PgIdentityStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    #[instrument(skip(self))]
    async fn find_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, avatar, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn usernames(&self, ids: &[UserId]) -> RepoResult<HashMap<UserId, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw: Vec<i64> = ids.iter().copied().map(UserId::into_inner).collect();
        let rows = sqlx::query_as::<_, UsernameRow>(
            "SELECT id, username FROM users WHERE id = ANY($1)",
        )
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (UserId::new(row.id), row.username))
            .collect())
    }

    #[instrument(skip(self))]
    async fn post_owner(&self, post_id: PostId) -> RepoResult<Option<UserId>> {
        let result = sqlx::query_scalar::<_, i64>("SELECT author_id FROM posts WHERE id = $1")
            .bind(post_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(UserId::new))
    }

    #[instrument(skip(self))]
    async fn comment_owner(&self, comment_id: CommentId) -> RepoResult<Option<(UserId, PostId)>> {
        let result = sqlx::query_as::<_, CommentOwnerRow>(
            "SELECT author_id, post_id FROM comments WHERE id = $1",
        )
        .bind(comment_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|row| (UserId::new(row.author_id), PostId::new(row.post_id))))
    }

    #[instrument(skip(self))]
    async fn user_exists(&self, id: UserId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
