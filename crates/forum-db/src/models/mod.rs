//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activity;
mod comment;
mod post;
mod reaction;
mod tag;
mod user;

pub use activity::ActivityModel;
pub use comment::CommentModel;
pub use post::PostModel;
pub use reaction::{CountsModel, ReactionModel};
pub use tag::TagModel;
pub use user::UserModel;
