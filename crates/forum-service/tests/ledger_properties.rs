//! Property tests for the reaction engine
//!
//! Over random sequences of like/dislike/remove from several users on one post:
//! - each user's ledger state equals their last like/dislike, or none after a remove
//! - stored counters equal the number of likes and dislikes in the ledger
//! - exactly one notification per new or changed reaction by a non-owner

mod common;

use std::collections::HashMap;

use common::Harness;
use forum_core::{ReactionAction, ReactionCounts, ReactionState, Subject};
use forum_service::ReactionService;
use proptest::prelude::*;

const USERS: usize = 3;

fn action_strategy() -> impl Strategy<Value = ReactionAction> {
    prop_oneof![
        Just(ReactionAction::Like),
        Just(ReactionAction::Dislike),
        Just(ReactionAction::Remove),
    ]
}

/// Expected state after replaying a user's actions
fn expected_state(actions: &[ReactionAction]) -> ReactionState {
    match actions.last() {
        Some(ReactionAction::Like) => ReactionState::Liked,
        Some(ReactionAction::Dislike) => ReactionState::Disliked,
        Some(ReactionAction::Remove) | None => ReactionState::None,
    }
}

/// Expected notifications: the state moved into a polarity it did not have
fn expected_notifications(actions: &[ReactionAction]) -> usize {
    let mut state = ReactionState::None;
    let mut count = 0;
    for &action in actions {
        let transition = state.apply(action);
        if transition.notification().is_some() {
            count += 1;
        }
        state = transition.state_after();
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: ledger, counters and notifications agree after any sequence
    #[test]
    fn reaction_sequences_stay_consistent(
        ops in prop::collection::vec((0..USERS, action_strategy()), 0..40)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            let h = Harness::new();
            let owner = h.store.add_user("owner").await;
            let post = h.store.add_post(owner, "Subject").await;
            let subject = Subject::Post(post);

            // User 0 is the owner so self-exclusion is exercised too
            let mut users = vec![owner];
            for i in 1..USERS {
                users.push(h.store.add_user(&format!("user{i}")).await);
            }

            let service = ReactionService::new(&h.ctx);
            let mut per_user: HashMap<usize, Vec<ReactionAction>> = HashMap::new();
            for &(user, action) in &ops {
                service.react(users[user], subject, action).await.unwrap();
                per_user.entry(user).or_default().push(action);
            }

            let mut likes = 0;
            let mut dislikes = 0;
            let mut notifications = 0;
            for (index, &user) in users.iter().enumerate() {
                let actions = per_user.get(&index).map(Vec::as_slice).unwrap_or_default();
                let state = h.store.reaction_state(subject, user).await;
                prop_assert_eq!(state, expected_state(actions));

                match state {
                    ReactionState::Liked => likes += 1,
                    ReactionState::Disliked => dislikes += 1,
                    ReactionState::None => {}
                }
                if user != owner {
                    notifications += expected_notifications(actions);
                }
            }

            prop_assert_eq!(
                h.store.stored_counts(subject).await,
                ReactionCounts::new(likes, dislikes)
            );

            let activities = h.store.activities().await;
            prop_assert_eq!(activities.len(), notifications);
            prop_assert!(activities.iter().all(|a| a.recipient_id == owner && a.actor_id != owner));

            Ok(())
        })?;
    }
}
