//! Reaction service
//!
//! Processes like/dislike/remove requests on posts and comments. The ledger
//! write and the counter update share one storage transaction that starts by
//! locking the subject row; the owner notification is written after commit.

use forum_core::value_objects::{
    LedgerTransition, ReactionAction, ReactionCounts, ReactionState, Subject, UserId,
};
use forum_core::DomainError;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ledger;
use super::notification::{NotificationEmitter, NotifyOutcome};

/// Result of a processed reaction request
#[derive(Debug)]
pub struct ReactionOutcome {
    pub subject: Subject,
    pub transition: LedgerTransition,
    /// Counters read back inside the transaction
    pub counts: ReactionCounts,
    pub notification: NotifyOutcome,
}

impl ReactionOutcome {
    /// Ledger state after the request
    pub fn state(&self) -> ReactionState {
        self.transition.state_after()
    }
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply `action` by `actor_id` to `subject`
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        actor_id: UserId,
        subject: Subject,
        action: ReactionAction,
    ) -> ServiceResult<ReactionOutcome> {
        if !self.ctx.identity().user_exists(actor_id).await? {
            return Err(DomainError::UserNotFound(actor_id).into());
        }

        let owner = self
            .ctx
            .identity()
            .subject_owner(subject)
            .await?
            .ok_or_else(|| DomainError::subject_not_found(subject))?;

        let mut tx = self.ctx.reaction_store().begin().await?;

        // The subject may have been deleted since the ownership lookup
        let before = tx
            .lock_subject(subject)
            .await?
            .ok_or_else(|| DomainError::subject_not_found(subject))?;

        let transition = ledger::apply_action(tx.as_mut(), subject, actor_id, action).await?;

        let delta = transition.counter_delta();
        let counts = if delta.is_zero() {
            before
        } else {
            tx.apply_delta(subject, delta).await?
        };

        tx.commit().await?;

        if transition.is_mutation() {
            info!(
                subject = %subject,
                user_id = %actor_id,
                action = %action,
                like_count = counts.like_count,
                dislike_count = counts.dislike_count,
                "Reaction recorded"
            );
        }

        let notification = NotificationEmitter::new(self.ctx)
            .reaction(actor_id, subject, owner, transition)
            .await;

        Ok(ReactionOutcome {
            subject,
            transition,
            counts,
            notification,
        })
    }

    /// Current reaction state of a user on a subject
    #[instrument(skip(self))]
    pub async fn state(&self, subject: Subject, user_id: UserId) -> ServiceResult<ReactionState> {
        Ok(self
            .ctx
            .reaction_store()
            .find(subject, user_id)
            .await?
            .map_or(ReactionState::None, |r| r.state()))
    }

    /// Stored counters of a subject
    #[instrument(skip(self))]
    pub async fn counts(&self, subject: Subject) -> ServiceResult<ReactionCounts> {
        Ok(self
            .ctx
            .reaction_store()
            .counts(subject)
            .await?
            .ok_or_else(|| DomainError::subject_not_found(subject))?)
    }
}
