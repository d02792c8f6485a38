//! Shared in-memory state

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use forum_core::entities::{Activity, Comment, Post, Reaction, User};
use forum_core::error::DomainError;
use forum_core::value_objects::{CommentId, PostId, Subject, TagId, UserId};

/// Users, posts, tags, comments and the reaction ledger
#[derive(Debug, Clone, Default)]
pub(crate) struct ContentState {
    pub users: BTreeMap<UserId, User>,
    pub posts: BTreeMap<PostId, Post>,
    /// Tag names by id; posts refer to tags by name
    pub tags: BTreeMap<TagId, String>,
    pub comments: BTreeMap<CommentId, Comment>,
    pub reactions: HashMap<(Subject, UserId), Reaction>,
    pub next_user_id: i64,
    pub next_post_id: i64,
    pub next_tag_id: i64,
    pub next_comment_id: i64,
}

impl ContentState {
    pub fn allocate_user_id(&mut self) -> UserId {
        self.next_user_id += 1;
        UserId::new(self.next_user_id)
    }

    pub fn allocate_post_id(&mut self) -> PostId {
        self.next_post_id += 1;
        PostId::new(self.next_post_id)
    }

    pub fn allocate_comment_id(&mut self) -> CommentId {
        self.next_comment_id += 1;
        CommentId::new(self.next_comment_id)
    }

    /// Create every tag in `names` that does not exist yet
    pub fn register_tags(&mut self, names: &[String]) {
        for name in names {
            if !self.tags.values().any(|existing| existing == name) {
                self.next_tag_id += 1;
                self.tags.insert(TagId::new(self.next_tag_id), name.clone());
            }
        }
    }

    /// Posts carrying the tag called `name`
    pub fn tag_usage(&self, name: &str) -> i64 {
        let count = self
            .posts
            .values()
            .filter(|p| p.tags.iter().any(|t| t == name))
            .count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// Activity rows in insertion order
#[derive(Debug, Clone, Default)]
pub(crate) struct ActivityState {
    pub rows: Vec<Activity>,
    pub next_id: i64,
}

/// In-memory forum storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) content: Arc<Mutex<ContentState>>,
    pub(crate) activities: Arc<Mutex<ActivityState>>,
    fail_activity_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every activity insert fail with a storage error until turned off
    pub fn fail_activity_writes(&self, fail: bool) {
        self.fail_activity_writes.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn check_activity_write(&self) -> Result<(), DomainError> {
        if self.fail_activity_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "injected activity write failure".to_string(),
            ));
        }
        Ok(())
    }
}
