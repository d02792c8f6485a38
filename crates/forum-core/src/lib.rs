//! # forum-core
//!
//! Domain layer containing entities, value objects, the reaction state machine,
//! and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_tags, Activity, ActivityKind, Comment, NewActivity, NewComment, NewPost, Post,
    PostStatus, PostUpdate, Reaction, Tag, UnknownActivityKind, User, UNKNOWN_ACTOR,
};
pub use error::DomainError;
pub use traits::{
    ActivityRepository, CommentRepository, IdentityStore, PostRepository, ReactionStore,
    ReactionTx, RepoResult, SubjectOwner, TagRepository,
};
pub use value_objects::{
    ActivityId, CommentId, CounterDelta, IdParseError, InvalidReactionAction, LedgerTransition,
    Polarity, PostFilter, PostId, PostSort, ReactionAction, ReactionCounts, ReactionState,
    SortKey, Subject, SubjectKind, TagId, UnknownPostSort, UnknownSubjectKind, UserId,
};
