//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Nothing here caches: every call goes to storage.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{
    Activity, Comment, NewActivity, NewComment, NewPost, Post, Reaction, Tag, User,
};
use crate::error::DomainError;
use crate::value_objects::{
    ActivityId, CommentId, CounterDelta, Polarity, PostFilter, PostId, ReactionCounts, Subject,
    TagId, UserId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Owner of a reactable subject together with the post it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectOwner {
    pub owner_id: UserId,
    /// The post itself, or the parent post of a comment
    pub post_id: PostId,
}

// ============================================================================
// Identity Store
// ============================================================================

/// Read-only lookups for users, post ownership and comment ownership
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Find user by ID
    async fn find_user(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Usernames for a set of users; missing users are absent from the map
    async fn usernames(&self, ids: &[UserId]) -> RepoResult<HashMap<UserId, String>>;

    /// Author of a post
    async fn post_owner(&self, post_id: PostId) -> RepoResult<Option<UserId>>;

    /// Author of a comment and the post it was left on
    async fn comment_owner(&self, comment_id: CommentId) -> RepoResult<Option<(UserId, PostId)>>;

    /// Check whether a user exists
    async fn user_exists(&self, id: UserId) -> RepoResult<bool> {
        Ok(self.find_user(id).await?.is_some())
    }

    /// Username of a single user
    async fn username(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.find_user(id).await?.map(|u| u.username))
    }

    /// Resolve who owns a subject
    async fn subject_owner(&self, subject: Subject) -> RepoResult<Option<SubjectOwner>> {
        Ok(match subject {
            Subject::Post(post_id) => self
                .post_owner(post_id)
                .await?
                .map(|owner_id| SubjectOwner { owner_id, post_id }),
            Subject::Comment(comment_id) => self
                .comment_owner(comment_id)
                .await?
                .map(|(owner_id, post_id)| SubjectOwner { owner_id, post_id }),
        })
    }
}

// ============================================================================
// Reaction Store
// ============================================================================

/// Reaction ledger plus the counter projection on posts and comments
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Open a transaction scoped to a single reaction request
    async fn begin(&self) -> RepoResult<Box<dyn ReactionTx>>;

    /// Current reaction of a user on a subject, outside any transaction
    async fn find(&self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Stored counters of a subject
    async fn counts(&self, subject: Subject) -> RepoResult<Option<ReactionCounts>>;

    /// Counters recomputed from the ledger rows
    async fn tally(&self, subject: Subject) -> RepoResult<ReactionCounts>;

    /// Posts the user currently likes, newest reaction first
    async fn liked_post_ids(&self, user_id: UserId) -> RepoResult<Vec<PostId>>;
}

/// One open reaction transaction
///
/// Dropping it without calling [`ReactionTx::commit`] rolls everything back.
#[async_trait]
pub trait ReactionTx: Send {
    /// Lock the subject row for the rest of the transaction and read its counters.
    /// Returns `None` when the subject does not exist.
    async fn lock_subject(&mut self, subject: Subject) -> RepoResult<Option<ReactionCounts>>;

    /// Ledger row for (subject, user)
    async fn find(&mut self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Insert a new ledger row
    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()>;

    /// Change the polarity of an existing ledger row
    async fn update_polarity(
        &mut self,
        subject: Subject,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<()>;

    /// Delete a ledger row
    async fn delete(&mut self, subject: Subject, user_id: UserId) -> RepoResult<()>;

    /// Add signed deltas to the stored counters and return the new values
    async fn apply_delta(
        &mut self,
        subject: Subject,
        delta: CounterDelta,
    ) -> RepoResult<ReactionCounts>;

    /// Commit the transaction
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Insert an activity
    async fn create(&self, activity: &NewActivity) -> RepoResult<Activity>;

    /// Find activity by ID
    async fn find_by_id(&self, id: ActivityId) -> RepoResult<Option<Activity>>;

    /// Notifications addressed to a user by other users, newest first
    async fn find_for_recipient(&self, recipient_id: UserId) -> RepoResult<Vec<Activity>>;

    /// Unread notifications addressed to a user by other users
    async fn count_unread(&self, recipient_id: UserId) -> RepoResult<i64>;

    /// Mark every unread notification of a user as read, returning rows changed
    async fn mark_all_read(&self, recipient_id: UserId) -> RepoResult<u64>;

    /// Mark unread notifications with an id up to and including `newest` as read.
    /// Rows inserted after a feed was listed stay unread.
    async fn mark_read_up_to(&self, recipient_id: UserId, newest: ActivityId) -> RepoResult<u64>;

    /// Activities performed by a user, newest first
    async fn find_by_actor(&self, actor_id: UserId) -> RepoResult<Vec<Activity>>;

    /// Delete a single activity
    async fn delete(&self, id: ActivityId) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Published posts matching the filter, ordered and paged as it asks.
    /// Ties are broken newest first.
    async fn list(&self, filter: &PostFilter) -> RepoResult<Vec<Post>>;

    /// Insert a post with zeroed counters, creating any tag not seen before
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Persist title, content, status and the full tag set
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post together with its comments, reactions and every activity
    /// targeting it, in one transaction
    async fn delete(&self, id: PostId) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every tag with its post count, by name
    async fn list(&self) -> RepoResult<Vec<Tag>>;

    /// Find tag by ID
    async fn find_by_id(&self, id: TagId) -> RepoResult<Option<Tag>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Comments on a post, oldest first
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;

    /// Insert a comment with zeroed counters
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;
}
