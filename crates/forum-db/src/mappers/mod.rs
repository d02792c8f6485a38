//! Entity <-> Model mappers
//!
//! Rows whose stored form cannot be represented as a domain value (an unknown
//! activity kind, a reaction without a subject) map to `DomainError::DatabaseError`.

mod activity;
mod comment;
mod post;
mod reaction;
mod tag;
mod user;

pub(crate) use reaction::SubjectColumns;
