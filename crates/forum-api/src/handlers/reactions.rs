//! Reaction handlers
//!
//! A single endpoint applies like, dislike or remove to a post or comment.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::dto::ReactionResponse;
use forum_service::ReactionService;

use crate::extractors::{AuthUser, ReactionPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// React to a post or comment
///
/// POST /reaction/{subject_type}/{id}/{action}
pub async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReactionPath>,
) -> ApiResult<Json<ReactionResponse>> {
    let subject = path.subject()?;
    let action = path.action()?;

    let outcome = ReactionService::new(state.service_context())
        .react(auth.user_id, subject, action)
        .await?;

    Ok(Json(ReactionResponse::from(&outcome)))
}
