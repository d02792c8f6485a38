//! Business logic services
//!
//! Reaction processing, the notification emitter and feed, and the post, tag
//! and comment use cases built on top of them.

pub mod comment;
pub mod context;
pub mod error;
pub mod feed;
pub mod ledger;
pub mod notification;
pub mod post;
pub mod reaction;
pub mod tag;

pub use comment::{CommentOutcome, CommentService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::{spawn_mark_read, FeedService};
pub use notification::{CommentNotifyOutcome, NotificationEmitter, NotifyOutcome, SkipReason};
pub use post::PostService;
pub use reaction::{ReactionOutcome, ReactionService};
pub use tag::TagService;
