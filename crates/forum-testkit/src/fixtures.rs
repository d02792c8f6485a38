//! Seeding and inspection helpers

use chrono::Utc;

use forum_core::entities::{Activity, Comment, Post, PostStatus, User};
use forum_core::value_objects::{
    CommentId, PostId, ReactionCounts, ReactionState, Subject, UserId,
};

use crate::store::MemoryStore;

impl MemoryStore {
    /// Register a user and return its id
    pub async fn add_user(&self, username: &str) -> UserId {
        let mut state = self.content.lock().await;
        let id = state.allocate_user_id();
        let user = User::new(id, username.to_string(), format!("{username}@example.com"));
        state.users.insert(id, user);
        id
    }

    /// Remove a user row without touching anything that references it
    pub async fn remove_user(&self, id: UserId) {
        self.content.lock().await.users.remove(&id);
    }

    /// Publish a post with zeroed counters
    pub async fn add_post(&self, author_id: UserId, title: &str) -> PostId {
        let mut state = self.content.lock().await;
        let id = state.allocate_post_id();
        let now = Utc::now();
        state.posts.insert(
            id,
            Post {
                id,
                author_id,
                title: title.to_string(),
                content: format!("{title} body"),
                status: PostStatus::Published,
                counts: ReactionCounts::default(),
                tags: Vec::new(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Add a comment with zeroed counters
    pub async fn add_comment(&self, post_id: PostId, author_id: UserId, content: &str) -> CommentId {
        let mut state = self.content.lock().await;
        let id = state.allocate_comment_id();
        let now = Utc::now();
        state.comments.insert(
            id,
            Comment {
                id,
                post_id,
                author_id,
                content: content.to_string(),
                counts: ReactionCounts::default(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Ledger state for (subject, user)
    pub async fn reaction_state(&self, subject: Subject, user_id: UserId) -> ReactionState {
        let state = self.content.lock().await;
        state
            .reactions
            .get(&(subject, user_id))
            .map_or(ReactionState::None, forum_core::Reaction::state)
    }

    /// Stored counters, zero when the subject does not exist
    pub async fn stored_counts(&self, subject: Subject) -> ReactionCounts {
        let state = self.content.lock().await;
        match subject {
            Subject::Post(id) => state.posts.get(&id).map(|p| p.counts),
            Subject::Comment(id) => state.comments.get(&id).map(|c| c.counts),
        }
        .unwrap_or_default()
    }

    /// Every activity row in insertion order
    pub async fn activities(&self) -> Vec<Activity> {
        self.activities.lock().await.rows.clone()
    }
}
