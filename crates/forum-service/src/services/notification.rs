//! Notification emitter
//!
//! Turns state-changing actions into activity rows. Every write here is best
//! effort: a storage failure is logged and reported as
//! [`NotifyOutcome::Failed`], never returned as an error to the caller.

use forum_core::entities::{Activity, ActivityKind, NewActivity};
use forum_core::traits::SubjectOwner;
use forum_core::value_objects::{LedgerTransition, PostId, Subject, UserId};
use forum_core::DomainError;
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;

/// Activity content strings, rendered after the actor's name
pub mod content {
    pub const POST_LIKED: &str = "liked your post";
    pub const POST_DISLIKED: &str = "disliked your post";
    pub const COMMENT_LIKED: &str = "liked your comment on";
    pub const COMMENT_DISLIKED: &str = "disliked your comment on";
    pub const COMMENTED: &str = "commented on your post";
    pub const COMMENTED_HISTORY: &str = "commented on a post by";

    pub fn created_post(title: &str) -> String {
        format!("created a new post: {title}")
    }

    pub fn updated_post(title: &str) -> String {
        format!("updated the post: {title}")
    }

    pub fn deleted_post(title: &str) -> String {
        format!("deleted the post: {title}")
    }
}

/// Why no activity was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Actor and recipient are the same user
    SelfAction,
    /// The ledger did not gain a new or changed reaction
    NoStateChange,
}

/// Result of a best-effort activity write
#[derive(Debug)]
pub enum NotifyOutcome {
    Emitted(Activity),
    Skipped(SkipReason),
    Failed(DomainError),
}

impl NotifyOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Stored row, when one was written
    pub fn activity(&self) -> Option<&Activity> {
        match self {
            Self::Emitted(activity) => Some(activity),
            _ => None,
        }
    }
}

/// Outcomes of the two rows a new comment produces
#[derive(Debug)]
pub struct CommentNotifyOutcome {
    /// Notification to the post author
    pub notification: NotifyOutcome,
    /// Entry in the commenter's own history
    pub history: NotifyOutcome,
}

/// Notification emitter
pub struct NotificationEmitter<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationEmitter<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Notify `recipient` unless the actor is acting on their own content
    #[instrument(skip(self, content))]
    pub async fn maybe_notify(
        &self,
        actor_id: UserId,
        recipient_id: UserId,
        kind: ActivityKind,
        target_id: PostId,
        content: impl Into<String>,
    ) -> NotifyOutcome {
        if actor_id == recipient_id {
            debug!("Actor owns the target, no notification");
            return NotifyOutcome::Skipped(SkipReason::SelfAction);
        }

        let activity =
            NewActivity::notification(actor_id, recipient_id, kind, target_id, content);
        self.write(&activity).await
    }

    /// Notify the subject owner about a ledger transition
    ///
    /// Only `Created` and `Flipped` transitions produce a notification.
    pub async fn reaction(
        &self,
        actor_id: UserId,
        subject: Subject,
        owner: SubjectOwner,
        transition: LedgerTransition,
    ) -> NotifyOutcome {
        let Some(polarity) = transition.notification() else {
            return NotifyOutcome::Skipped(SkipReason::NoStateChange);
        };

        let text = match (subject, polarity.is_like()) {
            (Subject::Post(_), true) => content::POST_LIKED,
            (Subject::Post(_), false) => content::POST_DISLIKED,
            (Subject::Comment(_), true) => content::COMMENT_LIKED,
            (Subject::Comment(_), false) => content::COMMENT_DISLIKED,
        };

        self.maybe_notify(
            actor_id,
            owner.owner_id,
            ActivityKind::from(polarity),
            owner.post_id,
            text,
        )
        .await
    }

    /// Notify the post author about a new comment and record it in the
    /// commenter's history
    pub async fn comment(
        &self,
        actor_id: UserId,
        post_author_id: UserId,
        post_id: PostId,
    ) -> CommentNotifyOutcome {
        let notification = self
            .maybe_notify(
                actor_id,
                post_author_id,
                ActivityKind::Comment,
                post_id,
                content::COMMENTED,
            )
            .await;
        let history = self
            .history(
                actor_id,
                ActivityKind::Comment,
                post_id,
                content::COMMENTED_HISTORY,
            )
            .await;

        CommentNotifyOutcome {
            notification,
            history,
        }
    }

    /// Self-addressed entry, stored already read
    #[instrument(skip(self, content))]
    pub async fn history(
        &self,
        actor_id: UserId,
        kind: ActivityKind,
        target_id: PostId,
        content: impl Into<String>,
    ) -> NotifyOutcome {
        self.write(&NewActivity::history(actor_id, kind, target_id, content))
            .await
    }

    async fn write(&self, activity: &NewActivity) -> NotifyOutcome {
        match self.ctx.activity_repo().create(activity).await {
            Ok(stored) => {
                debug!(
                    activity_id = %stored.id,
                    recipient_id = %stored.recipient_id,
                    kind = %stored.kind,
                    "Activity recorded"
                );
                NotifyOutcome::Emitted(stored)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    actor_id = %activity.actor_id,
                    recipient_id = %activity.recipient_id,
                    kind = %activity.kind,
                    "Failed to record activity"
                );
                NotifyOutcome::Failed(e)
            }
        }
    }
}
