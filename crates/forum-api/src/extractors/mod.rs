//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, listings and path parameters.

mod auth;
mod listing;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use listing::{PostListParams, PostListing};
pub use path::{IdPath, ReactionPath};
pub use validated::ValidatedJson;
