//! Tag handlers

use axum::{extract::State, Json};
use forum_core::TagId;
use forum_service::dto::{TagListResponse, TagPostsResponse};
use forum_service::TagService;

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List every tag with its post count
///
/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<TagListResponse>> {
    let tags = TagService::new(state.service_context()).list().await?;
    Ok(Json(tags))
}

/// Get a tag with its newest posts
///
/// GET /tags/{tag_id}
pub async fn get_tag(
    State(state): State<AppState>,
    IdPath(tag_id): IdPath<TagId>,
) -> ApiResult<Json<TagPostsResponse>> {
    let tag = TagService::new(state.service_context()).get(tag_id).await?;
    Ok(Json(tag))
}
