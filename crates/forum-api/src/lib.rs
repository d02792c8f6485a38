//! # forum-api
//!
//! REST API server built with Axum framework.
//!
//! Exposes reactions, the notification feed, posts and comments under `/api/v1`,
//! plus unauthenticated `/health` checks.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
