//! User entity - a registered forum member
//!
//! Accounts are created and authenticated elsewhere; the engine only reads them.

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Avatar path, or the shared default image
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(file) => format!("/uploads/avatars/{file}"),
            None => "/static/default-avatar.png".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url() {
        let mut user = User::new(UserId::new(1), "alice".into(), "alice@example.com".into());
        assert_eq!(user.avatar_url(), "/static/default-avatar.png");

        user.avatar = Some("1.png".into());
        assert_eq!(user.avatar_url(), "/uploads/avatars/1.png");
    }
}
