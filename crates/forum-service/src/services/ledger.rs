//! Reaction ledger operations
//!
//! All functions run inside an open [`ReactionTx`] whose subject row is
//! already locked, so the read-then-write below cannot interleave with
//! another request on the same subject.

use forum_core::entities::Reaction;
use forum_core::traits::{RepoResult, ReactionTx};
use forum_core::value_objects::{
    LedgerTransition, Polarity, ReactionAction, ReactionState, Subject, UserId,
};

/// Current ledger state for (subject, user); absence is `ReactionState::None`
pub async fn get_reaction(
    tx: &mut dyn ReactionTx,
    subject: Subject,
    user_id: UserId,
) -> RepoResult<ReactionState> {
    Ok(tx
        .find(subject, user_id)
        .await?
        .as_ref()
        .map_or(ReactionState::None, Reaction::state))
}

/// Record a like or dislike
pub async fn set_reaction(
    tx: &mut dyn ReactionTx,
    subject: Subject,
    user_id: UserId,
    polarity: Polarity,
) -> RepoResult<LedgerTransition> {
    let action = match polarity {
        Polarity::Like => ReactionAction::Like,
        Polarity::Dislike => ReactionAction::Dislike,
    };
    apply_action(tx, subject, user_id, action).await
}

/// Delete the user's reaction if there is one
pub async fn remove_reaction(
    tx: &mut dyn ReactionTx,
    subject: Subject,
    user_id: UserId,
) -> RepoResult<LedgerTransition> {
    apply_action(tx, subject, user_id, ReactionAction::Remove).await
}

/// Move the ledger row through the state machine and persist the result
pub async fn apply_action(
    tx: &mut dyn ReactionTx,
    subject: Subject,
    user_id: UserId,
    action: ReactionAction,
) -> RepoResult<LedgerTransition> {
    let current = get_reaction(&mut *tx, subject, user_id).await?;
    let transition = current.apply(action);

    match transition {
        LedgerTransition::Created(polarity) => {
            tx.insert(&Reaction::new(subject, user_id, polarity)).await?;
        }
        LedgerTransition::Flipped { to } => {
            tx.update_polarity(subject, user_id, to).await?;
        }
        LedgerTransition::Removed(_) => {
            tx.delete(subject, user_id).await?;
        }
        LedgerTransition::Unchanged(_) | LedgerTransition::Absent => {}
    }

    Ok(transition)
}
