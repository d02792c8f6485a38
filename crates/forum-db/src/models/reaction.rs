//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Counter pair read from a post or comment row, or tallied from the ledger
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CountsModel {
    pub like_count: i64,
    pub dislike_count: i64,
}
