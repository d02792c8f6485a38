//! In-memory ReactionStore

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use forum_core::entities::Reaction;
use forum_core::error::DomainError;
use forum_core::traits::{ReactionStore, ReactionTx, RepoResult};
use forum_core::value_objects::{
    CounterDelta, Polarity, PostId, ReactionCounts, Subject, UserId,
};

use crate::store::{ContentState, MemoryStore};

fn stored_counts(state: &ContentState, subject: Subject) -> Option<ReactionCounts> {
    match subject {
        Subject::Post(id) => state.posts.get(&id).map(|p| p.counts),
        Subject::Comment(id) => state.comments.get(&id).map(|c| c.counts),
    }
}

fn counts_mut(state: &mut ContentState, subject: Subject) -> Option<&mut ReactionCounts> {
    match subject {
        Subject::Post(id) => state.posts.get_mut(&id).map(|p| &mut p.counts),
        Subject::Comment(id) => state.comments.get_mut(&id).map(|c| &mut c.counts),
    }
}

fn tally(state: &ContentState, subject: Subject) -> ReactionCounts {
    state
        .reactions
        .values()
        .filter(|r| r.subject == subject)
        .fold(ReactionCounts::default(), |acc, r| match r.polarity {
            Polarity::Like => ReactionCounts::new(acc.like_count + 1, acc.dislike_count),
            Polarity::Dislike => ReactionCounts::new(acc.like_count, acc.dislike_count + 1),
        })
}

#[async_trait]
impl ReactionStore for MemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn ReactionTx>> {
        let guard = self.content.clone().lock_owned().await;
        let snapshot = guard.clone();
        Ok(Box::new(MemoryReactionTx {
            guard,
            snapshot: Some(snapshot),
        }))
    }

    async fn find(&self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let state = self.content.lock().await;
        Ok(state.reactions.get(&(subject, user_id)).cloned())
    }

    async fn counts(&self, subject: Subject) -> RepoResult<Option<ReactionCounts>> {
        let state = self.content.lock().await;
        Ok(stored_counts(&state, subject))
    }

    async fn tally(&self, subject: Subject) -> RepoResult<ReactionCounts> {
        let state = self.content.lock().await;
        Ok(tally(&state, subject))
    }

    async fn liked_post_ids(&self, user_id: UserId) -> RepoResult<Vec<PostId>> {
        let state = self.content.lock().await;
        let mut liked: Vec<&Reaction> = state
            .reactions
            .values()
            .filter(|r| r.user_id == user_id && r.is_like())
            .filter(|r| r.subject.post_id().is_some())
            .collect();
        liked.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(liked.iter().filter_map(|r| r.subject.post_id()).collect())
    }
}

/// Transaction over the whole content state
///
/// Holds the content lock until dropped, so transactions are fully serialized.
pub struct MemoryReactionTx {
    guard: OwnedMutexGuard<ContentState>,
    /// Restored on drop unless the transaction committed
    snapshot: Option<ContentState>,
}

impl Drop for MemoryReactionTx {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.guard = snapshot;
        }
    }
}

#[async_trait]
impl ReactionTx for MemoryReactionTx {
    async fn lock_subject(&mut self, subject: Subject) -> RepoResult<Option<ReactionCounts>> {
        Ok(stored_counts(&self.guard, subject))
    }

    async fn find(&mut self, subject: Subject, user_id: UserId) -> RepoResult<Option<Reaction>> {
        Ok(self.guard.reactions.get(&(subject, user_id)).cloned())
    }

    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()> {
        let key = (reaction.subject, reaction.user_id);
        if self.guard.reactions.contains_key(&key) {
            return Err(DomainError::DatabaseError(
                "duplicate key value violates unique constraint on reactions".to_string(),
            ));
        }
        self.guard.reactions.insert(key, reaction.clone());
        Ok(())
    }

    async fn update_polarity(
        &mut self,
        subject: Subject,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<()> {
        if let Some(reaction) = self.guard.reactions.get_mut(&(subject, user_id)) {
            reaction.flip_to(polarity);
        }
        Ok(())
    }

    async fn delete(&mut self, subject: Subject, user_id: UserId) -> RepoResult<()> {
        self.guard.reactions.remove(&(subject, user_id));
        Ok(())
    }

    async fn apply_delta(
        &mut self,
        subject: Subject,
        delta: CounterDelta,
    ) -> RepoResult<ReactionCounts> {
        let counts = counts_mut(&mut self.guard, subject).ok_or_else(|| {
            DomainError::DatabaseError(format!("no row to update for {subject}"))
        })?;

        let next = counts.apply(delta);
        if next.like_count < 0 || next.dislike_count < 0 {
            return Err(DomainError::DatabaseError(format!(
                "counter check constraint violated for {subject}"
            )));
        }
        *counts = next;
        Ok(next)
    }

    async fn commit(mut self: Box<Self>) -> RepoResult<()> {
        self.snapshot = None;
        Ok(())
    }
}
