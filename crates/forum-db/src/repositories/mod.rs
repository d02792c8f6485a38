//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.

mod activity;
mod comment;
mod error;
mod identity;
mod post;
mod reaction;
mod tag;

pub use activity::PgActivityRepository;
pub use comment::PgCommentRepository;
pub use identity::PgIdentityStore;
pub use post::PgPostRepository;
pub use reaction::{PgReactionStore, PgReactionTx};
pub use tag::PgTagRepository;
