//! # forum-testkit
//!
//! In-memory implementations of every forum-core repository trait, backed by
//! shared `tokio::sync::Mutex` state so clones observe the same data.
//!
//! A single [`MemoryStore`] implements all traits; hand it to a service context
//! once per trait:
//!
//! ```rust,ignore
//! let store = MemoryStore::new();
//! let alice = store.add_user("alice").await;
//! let post = store.add_post(alice, "Hello").await;
//! ```
//!
//! Reaction transactions hold the content lock for their whole lifetime and roll
//! back to a snapshot when dropped without commit.

mod activity;
mod content;
mod fixtures;
mod reaction;
mod store;

pub use reaction::MemoryReactionTx;
pub use store::MemoryStore;
