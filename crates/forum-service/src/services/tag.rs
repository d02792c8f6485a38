//! Tag service

use forum_core::value_objects::{PostFilter, TagId, MAX_PER_PAGE};
use forum_core::DomainError;
use tracing::instrument;

use crate::dto::{PostResponse, TagListResponse, TagPostsResponse, TagResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every tag with how many posts carry it
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<TagListResponse> {
        let tags = self.ctx.tag_repo().list().await?;
        Ok(TagListResponse {
            tags: tags.into_iter().map(TagResponse::from).collect(),
        })
    }

    /// A tag and its newest published posts
    #[instrument(skip(self))]
    pub async fn get(&self, tag_id: TagId) -> ServiceResult<TagPostsResponse> {
        let tag = self
            .ctx
            .tag_repo()
            .find_by_id(tag_id)
            .await?
            .ok_or(DomainError::TagNotFound(tag_id))?;

        let filter = PostFilter {
            tag_id: Some(tag_id),
            per_page: MAX_PER_PAGE,
            ..PostFilter::default()
        };
        let posts = self.ctx.post_repo().list(&filter).await?;

        Ok(TagPostsResponse {
            tag: tag.into(),
            posts: posts.into_iter().map(PostResponse::from).collect(),
        })
    }
}
