//! Per-user views: activity history and liked posts

use axum::{extract::State, Json};
use forum_service::dto::{LikedPostsResponse, NotificationResponse};
use forum_service::FeedService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Activities performed by the current user, newest first
///
/// GET /users/@me/activity
pub async fn my_activity(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let history = FeedService::new(state.service_context())
        .list_history(auth.user_id)
        .await?;
    Ok(Json(history))
}

/// Posts the current user currently likes
///
/// GET /users/@me/liked-posts
pub async fn my_liked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<LikedPostsResponse>> {
    let post_ids = FeedService::new(state.service_context())
        .liked_post_ids(auth.user_id)
        .await?;
    Ok(Json(LikedPostsResponse { post_ids }))
}
