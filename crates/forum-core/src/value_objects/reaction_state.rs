//! Reaction state machine
//!
//! Per (subject, user) the ledger holds one of three states: no reaction, liked,
//! or disliked. An incoming [`ReactionAction`] moves between them and yields a
//! [`LedgerTransition`], which in turn decides the counter delta and whether the
//! subject owner should be notified.
//!
//! | Current  | Action  | New      | Delta    | Notify  |
//! |----------|---------|----------|----------|---------|
//! | None     | like    | Liked    | (+1, 0)  | like    |
//! | None     | dislike | Disliked | (0, +1)  | dislike |
//! | Liked    | like    | Liked    | (0, 0)   | -       |
//! | Liked    | dislike | Disliked | (-1, +1) | dislike |
//! | Liked    | remove  | None     | (-1, 0)  | -       |
//! | Disliked | dislike | Disliked | (0, 0)   | -       |
//! | Disliked | like    | Liked    | (+1, -1) | like    |
//! | Disliked | remove  | None     | (0, -1)  | -       |
//! | None     | remove  | None     | (0, 0)   | -       |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Polarity of a stored reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    #[inline]
    pub const fn is_like(self) -> bool {
        matches!(self, Self::Like)
    }

    #[inline]
    pub const fn from_is_like(is_like: bool) -> Self {
        if is_like {
            Self::Like
        } else {
            Self::Dislike
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action requested by a user against a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Like,
    Dislike,
    Remove,
}

impl ReactionAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Remove => "remove",
        }
    }

    /// Polarity this action sets, or `None` for a removal
    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Like => Some(Polarity::Like),
            Self::Dislike => Some(Polarity::Dislike),
            Self::Remove => None,
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when an action is outside {like, dislike, remove}
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reaction action: {0}")]
pub struct InvalidReactionAction(pub String);

impl FromStr for ReactionAction {
    type Err = InvalidReactionAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "remove" => Ok(Self::Remove),
            other => Err(InvalidReactionAction(other.to_string())),
        }
    }
}

/// Ledger state for one (subject, user) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionState {
    #[default]
    None,
    Liked,
    Disliked,
}

impl ReactionState {
    pub const fn from_polarity(polarity: Option<Polarity>) -> Self {
        match polarity {
            Some(Polarity::Like) => Self::Liked,
            Some(Polarity::Dislike) => Self::Disliked,
            None => Self::None,
        }
    }

    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::None => None,
            Self::Liked => Some(Polarity::Like),
            Self::Disliked => Some(Polarity::Dislike),
        }
    }

    /// Value reported to clients as `userAction`
    pub const fn user_action(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Liked => "like",
            Self::Disliked => "dislike",
        }
    }

    /// Apply an action to this state
    pub const fn apply(self, action: ReactionAction) -> LedgerTransition {
        match (self.polarity(), action.polarity()) {
            (None, Some(to)) => LedgerTransition::Created(to),
            (None, None) => LedgerTransition::Absent,
            (Some(from), None) => LedgerTransition::Removed(from),
            (Some(from), Some(to)) => {
                if from.is_like() == to.is_like() {
                    LedgerTransition::Unchanged(to)
                } else {
                    LedgerTransition::Flipped { to }
                }
            }
        }
    }
}

/// Outcome of a ledger mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "transition", content = "polarity")]
pub enum LedgerTransition {
    /// No reaction existed; one was inserted
    Created(Polarity),
    /// A reaction with the same polarity already existed
    Unchanged(Polarity),
    /// An existing reaction changed polarity
    Flipped { to: Polarity },
    /// An existing reaction was deleted
    Removed(Polarity),
    /// Removal requested but nothing was stored
    Absent,
}

impl LedgerTransition {
    /// State of the ledger after this transition
    pub const fn state_after(self) -> ReactionState {
        match self {
            Self::Created(p) | Self::Unchanged(p) | Self::Flipped { to: p } => {
                ReactionState::from_polarity(Some(p))
            }
            Self::Removed(_) | Self::Absent => ReactionState::None,
        }
    }

    /// Counter delta that keeps the projection in step with this transition
    pub const fn counter_delta(self) -> CounterDelta {
        match self {
            Self::Created(Polarity::Like) => CounterDelta::new(1, 0),
            Self::Created(Polarity::Dislike) => CounterDelta::new(0, 1),
            Self::Flipped { to: Polarity::Like } => CounterDelta::new(1, -1),
            Self::Flipped { to: Polarity::Dislike } => CounterDelta::new(-1, 1),
            Self::Removed(Polarity::Like) => CounterDelta::new(-1, 0),
            Self::Removed(Polarity::Dislike) => CounterDelta::new(0, -1),
            Self::Unchanged(_) | Self::Absent => CounterDelta::ZERO,
        }
    }

    /// Polarity to notify the subject owner about, if any
    ///
    /// Only new or changed reactions notify; re-submitting the same reaction or
    /// removing one never does.
    pub const fn notification(self) -> Option<Polarity> {
        match self {
            Self::Created(p) | Self::Flipped { to: p } => Some(p),
            Self::Unchanged(_) | Self::Removed(_) | Self::Absent => None,
        }
    }

    /// Whether the ledger row was written
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Unchanged(_) | Self::Absent)
    }
}

/// Signed change to a subject's like/dislike counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CounterDelta {
    pub likes: i32,
    pub dislikes: i32,
}

impl CounterDelta {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(likes: i32, dislikes: i32) -> Self {
        Self { likes, dislikes }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.likes == 0 && self.dislikes == 0
    }
}

/// Denormalized counters stored on a post or comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like_count: i64,
    pub dislike_count: i64,
}

impl ReactionCounts {
    pub const fn new(like_count: i64, dislike_count: i64) -> Self {
        Self {
            like_count,
            dislike_count,
        }
    }

    /// Counters after applying a delta
    pub const fn apply(self, delta: CounterDelta) -> Self {
        Self {
            like_count: self.like_count + delta.likes as i64,
            dislike_count: self.dislike_count + delta.dislikes as i64,
        }
    }
}
