//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityRepository, CommentRepository, IdentityStore, PostRepository, ReactionStore,
    ReactionTx, RepoResult, SubjectOwner, TagRepository,
};
