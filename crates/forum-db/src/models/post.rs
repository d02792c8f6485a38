//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub status: String,
    pub like_count: i64,
    pub dislike_count: i64,
    /// `ARRAY(...)` over post_tags, sorted by name
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
