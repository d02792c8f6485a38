//! Domain entities - core business objects

mod activity;
mod comment;
mod post;
mod reaction;
mod tag;
mod user;

pub use activity::{Activity, ActivityKind, NewActivity, UnknownActivityKind, UNKNOWN_ACTOR};
pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostStatus, PostUpdate};
pub use reaction::Reaction;
pub use tag::{normalize_tags, Tag, MAX_TAGS_PER_POST, MAX_TAG_LENGTH};
pub use user::User;
