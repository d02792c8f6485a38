//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, notifications, posts, reactions, tags, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(reaction_routes())
        .merge(notification_routes())
        .merge(post_routes())
        .merge(tag_routes())
        .merge(user_routes())
}

fn reaction_routes() -> Router<AppState> {
    Router::new().route(
        "/reaction/:subject_type/:id/:action",
        post(reactions::react),
    )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/count", get(notifications::unread_count))
        .route("/notifications/mark-read", post(notifications::mark_all_read))
        .route(
            "/notifications/:notification_id",
            axum::routing::delete(notifications::delete_notification),
        )
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/:post_id/comments", post(posts::create_comment))
}

fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(tags::list_tags))
        .route("/tags/:tag_id", get(tags::get_tag))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/activity", get(users::my_activity))
        .route("/users/@me/liked-posts", get(users::my_liked_posts))
}
