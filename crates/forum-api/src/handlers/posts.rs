//! Post and comment handlers

use axum::{extract::State, Json};
use forum_core::PostId;
use forum_service::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, PostDetailResponse,
    PostListResponse, PostResponse, UpdatePostRequest,
};
use forum_service::{CommentService, PostService};

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, PostListing, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let post = PostService::new(state.service_context())
        .create(auth.user_id, request)
        .await?;
    Ok(Created(Json(post)))
}

/// List published posts
///
/// GET /posts?sort=&search=&author=&tag=&page=&per_page=
pub async fn list_posts(
    State(state): State<AppState>,
    PostListing(filter): PostListing,
) -> ApiResult<Json<PostListResponse>> {
    let posts = PostService::new(state.service_context()).list(filter).await?;
    Ok(Json(posts))
}

/// Get a post with its comments
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post = PostService::new(state.service_context())
        .get(post_id, viewer.user_id())
        .await?;
    Ok(Json(post))
}

/// Edit a post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post = PostService::new(state.service_context())
        .update(auth.user_id, post_id, request.into())
        .await?;
    Ok(Json(post))
}

/// Delete a post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<NoContent> {
    PostService::new(state.service_context())
        .delete(auth.user_id, post_id)
        .await?;
    Ok(NoContent)
}

/// Comment on a post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let outcome = CommentService::new(state.service_context())
        .create(auth.user_id, post_id, request.content)
        .await?;
    Ok(Created(Json(outcome.comment)))
}
