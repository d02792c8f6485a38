//! Notification feed handlers

use axum::{extract::State, Json};
use forum_core::ActivityId;
use forum_service::dto::{MarkReadResponse, NotificationFeedResponse, UnreadCountResponse};
use forum_service::services::spawn_mark_read;
use forum_service::FeedService;

use crate::extractors::{AuthUser, IdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List notifications, newest first
///
/// GET /notifications
///
/// The unread count reflects the state before this read. The listed
/// notifications are marked read in the background afterwards; anything
/// newer than the first entry stays unread.
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<NotificationFeedResponse>> {
    let service = FeedService::new(state.service_context());
    let unread_count = service.unread_count(auth.user_id).await?;
    let notifications = service.list_for_recipient(auth.user_id).await?;

    if unread_count > 0 {
        if let Some(newest) = notifications.iter().map(|n| n.id).max() {
            spawn_mark_read(state.service_context().clone(), auth.user_id, newest);
        }
    }

    Ok(Json(NotificationFeedResponse {
        notifications,
        unread_count,
    }))
}

/// Count unread notifications
///
/// GET /notifications/count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let count = FeedService::new(state.service_context())
        .unread_count(auth.user_id)
        .await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// Mark every notification read
///
/// POST /notifications/mark-read
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MarkReadResponse>> {
    let marked = FeedService::new(state.service_context())
        .mark_all_read(auth.user_id)
        .await?;
    Ok(Json(MarkReadResponse { marked }))
}

/// Delete one of your notifications
///
/// DELETE /notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ActivityId>,
) -> ApiResult<NoContent> {
    FeedService::new(state.service_context())
        .delete(id, auth.user_id)
        .await?;
    Ok(NoContent)
}
