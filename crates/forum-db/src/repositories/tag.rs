//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Tag;
use forum_core::traits::{RepoResult, TagRepository};
use forum_core::value_objects::TagId;

use crate::models::TagModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.name, COUNT(pt.post_id) AS post_count
            FROM tags t
            LEFT JOIN post_tags pt ON pt.tag_id = t.id
            GROUP BY t.id, t.name
            ORDER BY t.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TagId) -> RepoResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.name,
                   (SELECT COUNT(*) FROM post_tags pt WHERE pt.tag_id = t.id) AS post_count
            FROM tags t
            WHERE t.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Tag::from))
    }
}
