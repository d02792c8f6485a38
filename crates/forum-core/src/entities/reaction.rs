//! Reaction entity - one user's like or dislike on a post or comment

use chrono::{DateTime, Utc};

use crate::value_objects::{Polarity, ReactionState, Subject, UserId};

/// Ledger row: at most one per (subject, user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub subject: Subject,
    pub user_id: UserId,
    pub polarity: Polarity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(subject: Subject, user_id: UserId, polarity: Polarity) -> Self {
        let now = Utc::now();
        Self {
            subject,
            user_id,
            polarity,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_like(&self) -> bool {
        self.polarity.is_like()
    }

    /// Ledger state this row represents
    pub fn state(&self) -> ReactionState {
        ReactionState::from_polarity(Some(self.polarity))
    }

    /// Switch polarity, touching the timestamp
    pub fn flip_to(&mut self, polarity: Polarity) {
        self.polarity = polarity;
        self.updated_at = Utc::now();
    }
}
