//! Tag database model

use sqlx::FromRow;

/// Tag row joined with how many posts carry it
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}
