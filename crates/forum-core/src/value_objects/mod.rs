//! Value objects - immutable types that represent domain concepts

mod ids;
mod listing;
mod reaction_state;
mod subject;

pub use ids::{ActivityId, CommentId, IdParseError, PostId, TagId, UserId};
pub use listing::{PostFilter, PostSort, SortKey, UnknownPostSort, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use reaction_state::{
    CounterDelta, InvalidReactionAction, LedgerTransition, Polarity, ReactionAction,
    ReactionCounts, ReactionState,
};
pub use subject::{Subject, SubjectKind, UnknownSubjectKind};
