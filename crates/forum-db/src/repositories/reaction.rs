//! PostgreSQL implementation of ReactionStore
//!
//! Each reaction request runs in one transaction that first takes a row lock on
//! the post or comment (`SELECT ... FOR UPDATE`). Concurrent requests on the same
//! subject therefore serialize, and the relative counter update always sees the
//! ledger state it was derived from.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use forum_core::entities::Reaction;
use forum_core::traits::{ReactionStore, ReactionTx, RepoResult};
use forum_core::value_objects::{
    CounterDelta, Polarity, PostId, ReactionCounts, Subject, SubjectKind, UserId,
};

use crate::mappers::SubjectColumns;
use crate::models::{CountsModel, ReactionModel};

use super::error::map_db_error;

/// Statements that differ only by subject table
struct SubjectSql {
    lock: &'static str,
    apply_delta: &'static str,
    counts: &'static str,
    find: &'static str,
    update_polarity: &'static str,
    delete: &'static str,
    tally: &'static str,
}

const POST_SQL: SubjectSql = SubjectSql {
    lock: "SELECT like_count, dislike_count FROM posts WHERE id = $1 FOR UPDATE",
    apply_delta: r"
        UPDATE posts
        SET like_count = like_count + $2, dislike_count = dislike_count + $3
        WHERE id = $1
        RETURNING like_count, dislike_count
        ",
    counts: "SELECT like_count, dislike_count FROM posts WHERE id = $1",
    find: r"
        SELECT user_id, post_id, comment_id, is_like, created_at, updated_at
        FROM reactions
        WHERE post_id = $1 AND user_id = $2
        ",
    update_polarity: r"
        UPDATE reactions SET is_like = $3, updated_at = NOW()
        WHERE post_id = $1 AND user_id = $2
        ",
    delete: "DELETE FROM reactions WHERE post_id = $1 AND user_id = $2",
    tally: r"
        SELECT COUNT(*) FILTER (WHERE is_like) AS like_count,
               COUNT(*) FILTER (WHERE NOT is_like) AS dislike_count
        FROM reactions
        WHERE post_id = $1
        ",
};

const COMMENT_SQL: SubjectSql = SubjectSql {
    lock: "SELECT like_count, dislike_count FROM comments WHERE id = $1 FOR UPDATE",
    apply_delta: r"
        UPDATE comments
        SET like_count = like_count + $2, dislike_count = dislike_count + $3
        WHERE id = $1
        RETURNING like_count, dislike_count
        ",
    counts: "SELECT like_count, dislike_count FROM comments WHERE id = $1",
    find: r"
        SELECT user_id, post_id, comment_id, is_like, created_at, updated_at
        FROM reactions
        WHERE comment_id = $1 AND user_id = $2
        ",
    update_polarity: r"
        UPDATE reactions SET is_like = $3, updated_at = NOW()
        WHERE comment_id = $1 AND user_id = $2
        ",
    delete: "DELETE FROM reactions WHERE comment_id = $1 AND user_id = $2",
    tally: r"
        SELECT COUNT(*) FILTER (WHERE is_like) AS like_count,
               COUNT(*) FILTER (WHERE NOT is_like) AS dislike_count
        FROM reactions
        WHERE comment_id = $1
        ",
};

fn sql_for(subject: Subject) -> &'static SubjectSql {
    match subject.kind() {
        SubjectKind::Post => &POST_SQL,
        SubjectKind::Comment => &COMMENT_SQL,
    }
}

/// PostgreSQL implementation of ReactionStore
#[derive(Clone)]
pub struct PgReactionStore {
    pool: PgPool,
}

impl PgReactionStore {
    /// Create a new PgReactionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionStore for PgReactionStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn ReactionTx>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgReactionTx { tx }))
    }

    #[instrument(skip(self))]
    async fn find(&self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(sql_for(subject).find)
            .bind(subject.raw_id())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn counts(&self, subject: Subject) -> RepoResult<Option<ReactionCounts>> {
        let result = sqlx::query_as::<_, CountsModel>(sql_for(subject).counts)
            .bind(subject.raw_id())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ReactionCounts::from))
    }

    #[instrument(skip(self))]
    async fn tally(&self, subject: Subject) -> RepoResult<ReactionCounts> {
        let result = sqlx::query_as::<_, CountsModel>(sql_for(subject).tally)
            .bind(subject.raw_id())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn liked_post_ids(&self, user_id: UserId) -> RepoResult<Vec<PostId>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT post_id
            FROM reactions
            WHERE user_id = $1 AND post_id IS NOT NULL AND is_like
            ORDER BY updated_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostId::new).collect())
    }
}

/// Open reaction transaction; rolled back by sqlx when dropped uncommitted
pub struct PgReactionTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ReactionTx for PgReactionTx {
    #[instrument(skip(self))]
    async fn lock_subject(&mut self, subject: Subject) -> RepoResult<Option<ReactionCounts>> {
        let result = sqlx::query_as::<_, CountsModel>(sql_for(subject).lock)
            .bind(subject.raw_id())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ReactionCounts::from))
    }

    #[instrument(skip(self))]
    async fn find(&mut self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(sql_for(subject).find)
            .bind(subject.raw_id())
            .bind(user_id.into_inner())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()> {
        let columns = SubjectColumns::from(reaction.subject);

        sqlx::query(
            r"
            INSERT INTO reactions (user_id, post_id, comment_id, is_like, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(reaction.user_id.into_inner())
        .bind(columns.post_id)
        .bind(columns.comment_id)
        .bind(reaction.is_like())
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_polarity(
        &mut self,
        subject: Subject,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<()> {
        sqlx::query(sql_for(subject).update_polarity)
            .bind(subject.raw_id())
            .bind(user_id.into_inner())
            .bind(polarity.is_like())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, subject: Subject, user_id: UserId) -> RepoResult<()> {
        sqlx::query(sql_for(subject).delete)
            .bind(subject.raw_id())
            .bind(user_id.into_inner())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_delta(
        &mut self,
        subject: Subject,
        delta: CounterDelta,
    ) -> RepoResult<ReactionCounts> {
        let result = sqlx::query_as::<_, CountsModel>(sql_for(subject).apply_delta)
            .bind(subject.raw_id())
            .bind(i64::from(delta.likes))
            .bind(i64::from(delta.dislikes))
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }
}

impl std::fmt::Debug for PgReactionTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgReactionTx").finish_non_exhaustive()
    }
}
