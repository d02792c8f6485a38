//! Shared setup for engine tests

#![allow(dead_code)]

use std::sync::Arc;

use forum_common::{ForumConfig, JwtService};
use forum_core::{PostId, UserId};
use forum_service::{ServiceContext, ServiceContextBuilder};
use forum_testkit::MemoryStore;

/// In-memory store plus a context wired to it
pub struct Harness {
    pub store: MemoryStore,
    pub ctx: ServiceContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ForumConfig::default())
    }

    pub fn with_config(forum: ForumConfig) -> Self {
        let store = MemoryStore::new();
        let ctx = ServiceContextBuilder::new()
            .store(Arc::new(store.clone()))
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .forum_config(forum)
            .build()
            .expect("context is complete");
        Self { store, ctx }
    }

    /// Users 1 (actor) and 2 (owner), and a post owned by user 2
    pub async fn actor_owner_post(&self) -> (UserId, UserId, PostId) {
        let actor = self.store.add_user("alice").await;
        let owner = self.store.add_user("bob").await;
        let post = self.store.add_post(owner, "Owner's post").await;
        (actor, owner, post)
    }
}
