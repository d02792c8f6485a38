//! Comment service

use forum_core::entities::NewComment;
use forum_core::value_objects::{PostId, UserId};
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::CommentResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::{CommentNotifyOutcome, NotificationEmitter};

/// A stored comment plus what the emitter did about it
#[derive(Debug)]
pub struct CommentOutcome {
    pub comment: CommentResponse,
    pub notify: CommentNotifyOutcome,
}

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a post and notify its author
    #[instrument(skip(self, content))]
    pub async fn create(
        &self,
        author_id: UserId,
        post_id: PostId,
        content: String,
    ) -> ServiceResult<CommentOutcome> {
        let new_comment = NewComment::new(post_id, author_id, content);

        if new_comment.content.trim().is_empty() {
            return Err(DomainError::ValidationError("Comment content is required".into()).into());
        }
        let max = self.ctx.comment_max_length();
        if new_comment.char_len() > max {
            return Err(DomainError::ContentTooLong { max }.into());
        }

        if !self.ctx.identity().user_exists(author_id).await? {
            return Err(DomainError::UserNotFound(author_id).into());
        }
        let post_author = self
            .ctx
            .identity()
            .post_owner(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let comment = self.ctx.comment_repo().create(&new_comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        let notify = NotificationEmitter::new(self.ctx)
            .comment(author_id, post_author, post_id)
            .await;

        Ok(CommentOutcome {
            comment: comment.into(),
            notify,
        })
    }
}
