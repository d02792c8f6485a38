//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{info, instrument};

use forum_core::entities::{NewPost, Post};
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::{PostFilter, PostId, PostSort};

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// Post columns plus the sorted tag names, for queries aliasing posts as `p`
const POST_COLUMNS: &str = r"
    p.id, p.author_id, p.title, p.content, p.status, p.like_count, p.dislike_count,
    ARRAY(
        SELECT t.name
        FROM post_tags pt
        JOIN tags t ON t.id = pt.tag_id
        WHERE pt.post_id = p.id
        ORDER BY t.name
    ) AS tags,
    p.created_at, p.updated_at
";

/// ORDER BY clause for a listing; ties go to the newest post
fn order_by(sort: PostSort) -> &'static str {
    match sort {
        PostSort::DateDesc => "p.created_at DESC, p.id DESC",
        PostSort::DateAsc => "p.created_at ASC, p.id ASC",
        PostSort::LikesDesc => "p.like_count DESC, p.created_at DESC, p.id DESC",
        PostSort::LikesAsc => "p.like_count ASC, p.created_at DESC, p.id DESC",
        PostSort::DislikesDesc => "p.dislike_count DESC, p.created_at DESC, p.id DESC",
        PostSort::DislikesAsc => "p.dislike_count ASC, p.created_at DESC, p.id DESC",
    }
}

/// `ILIKE` pattern matching `term` anywhere, with wildcards in the term escaped
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Make `post_id` carry exactly `names`, creating unseen tags
async fn replace_tags(conn: &mut PgConnection, post_id: i64, names: &[String]) -> RepoResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    if names.is_empty() {
        return Ok(());
    }

    sqlx::query("INSERT INTO tags (name) SELECT UNNEST($1::TEXT[]) ON CONFLICT (name) DO NOTHING")
        .bind(names)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    sqlx::query(
        r"
        INSERT INTO post_tags (post_id, tag_id)
        SELECT $1, id FROM tags WHERE name = ANY($2)
        ",
    )
    .bind(post_id)
    .bind(names)
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1");

        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self), fields(sort = %filter.sort))]
    async fn list(&self, filter: &PostFilter) -> RepoResult<Vec<Post>> {
        let sql = format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts p
            WHERE p.status = 'published'
              AND ($1::BIGINT IS NULL OR p.author_id = $1)
              AND ($2::BIGINT IS NULL OR EXISTS (
                    SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = $2
                  ))
              AND ($3::TEXT IS NULL OR p.title ILIKE $3 OR p.content ILIKE $3)
            ORDER BY {order}
            LIMIT $4 OFFSET $5
            ",
            order = order_by(filter.sort),
        );

        let rows = sqlx::query_as::<_, PostModel>(&sql)
            .bind(filter.author_id.map(i64::from))
            .bind(filter.tag_id.map(i64::from))
            .bind(filter.search_term().map(like_pattern))
            .bind(filter.limit())
            .bind(filter.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(author_id = %post.author_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO posts (author_id, title, content, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(post.author_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        replace_tags(&mut tx, id, &post.tags).await?;

        let sql = format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1");
        let row = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3, status = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.status.as_str())
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        replace_tags(&mut tx, post.id.into_inner(), &post.tags).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let activities = sqlx::query("DELETE FROM activities WHERE target_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // Comments, reactions and tag links go with the post through ON DELETE CASCADE
        let posts = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if posts.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(
            post_id = %id,
            activities_removed = activities.rows_affected(),
            "Post deleted"
        );
        Ok(())
    }
}
