//! Post service
//!
//! Creates, edits, lists, shows and deletes posts. Every successful change
//! leaves an entry in the author's history.

use forum_core::entities::{normalize_tags, ActivityKind, PostUpdate};
use forum_core::value_objects::{PostFilter, PostId, Subject, UserId};
use forum_core::{DomainError, Post, ReactionState};
use tracing::{debug, info, instrument};

use crate::dto::{
    CommentResponse, CreatePostRequest, PostDetailResponse, PostListResponse, PostResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::{content, NotificationEmitter};
use super::reaction::ReactionService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new post
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut new_post = request.into_new_post(author_id);
        new_post.tags = normalize_tags(&new_post.tags)?;

        if !self.ctx.identity().user_exists(author_id).await? {
            return Err(DomainError::UserNotFound(author_id).into());
        }

        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(post_id = %post.id, author_id = %author_id, tags = post.tags.len(), "Post created");

        NotificationEmitter::new(self.ctx)
            .history(
                author_id,
                ActivityKind::CreatePost,
                post.id,
                content::created_post(&post.title),
            )
            .await;

        Ok(post.into())
    }

    /// One page of published posts
    ///
    /// Count orderings read the stored counters, so the order reflects every
    /// reaction committed before the query.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: PostFilter) -> ServiceResult<PostListResponse> {
        let posts = self.ctx.post_repo().list(&filter).await?;

        debug!(returned = posts.len(), "Posts listed");

        Ok(PostListResponse {
            posts: posts.into_iter().map(PostResponse::from).collect(),
            sort: filter.sort,
            page: filter.page.max(1),
            per_page: u32::try_from(filter.limit()).unwrap_or(filter.per_page),
        })
    }

    /// Post with comments and the viewer's reaction on it
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        post_id: PostId,
        viewer: Option<UserId>,
    ) -> ServiceResult<PostDetailResponse> {
        let post = self.find(post_id).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_post(post_id)
            .await?
            .into_iter()
            .map(CommentResponse::from)
            .collect();

        let state = match viewer {
            Some(user_id) => {
                ReactionService::new(self.ctx)
                    .state(Subject::Post(post_id), user_id)
                    .await?
            }
            None => ReactionState::None,
        };

        Ok(PostDetailResponse {
            post: post.into(),
            comments,
            user_action: state.user_action(),
        })
    }

    /// Edit a post; only its author may do so
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        actor_id: UserId,
        post_id: PostId,
        mut update: PostUpdate,
    ) -> ServiceResult<PostResponse> {
        update.tags = update.tags.as_deref().map(normalize_tags).transpose()?;

        let mut post = self.find_owned(actor_id, post_id).await?;

        if update.is_empty() {
            return Ok(post.into());
        }

        update.apply_to(&mut post);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Post updated");

        NotificationEmitter::new(self.ctx)
            .history(
                actor_id,
                ActivityKind::UpdateProfile,
                post_id,
                content::updated_post(&post.title),
            )
            .await;

        Ok(post.into())
    }

    /// Delete a post together with everything that references it
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: UserId, post_id: PostId) -> ServiceResult<()> {
        let post = self.find_owned(actor_id, post_id).await?;

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");

        NotificationEmitter::new(self.ctx)
            .history(
                actor_id,
                ActivityKind::DeletePost,
                post_id,
                content::deleted_post(&post.title),
            )
            .await;

        Ok(())
    }

    async fn find(&self, post_id: PostId) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?)
    }

    async fn find_owned(&self, actor_id: UserId, post_id: PostId) -> ServiceResult<Post> {
        let post = self.find(post_id).await?;
        if !post.is_author(actor_id) {
            return Err(DomainError::NotPostAuthor.into());
        }
        Ok(post)
    }
}
