//! Activity database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for activities table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub id: i64,
    pub actor_id: i64,
    pub recipient_id: i64,
    pub kind: String,
    pub target_id: i64,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
