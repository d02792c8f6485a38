//! Post listing extractor
//!
//! Extracts sort order, filters and page parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use forum_core::value_objects::{PostFilter, PostSort, TagId, UserId, DEFAULT_PER_PAGE};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    /// `date_desc`, `date_asc`, `likes_desc`, `likes_asc`, `dislikes_desc` or `dislikes_asc`
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    /// Author user id
    #[serde(default)]
    pub author: Option<String>,
    /// Tag id
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Validated listing parameters
#[derive(Debug, Clone, Default)]
pub struct PostListing(pub PostFilter);

impl TryFrom<PostListParams> for PostListing {
    type Error = ApiError;

    fn try_from(params: PostListParams) -> Result<Self, Self::Error> {
        let sort = params
            .sort
            .as_deref()
            .map(str::parse::<PostSort>)
            .transpose()
            .map_err(|e| ApiError::invalid_query(e.to_string()))?
            .unwrap_or_default();

        let author_id = params
            .author
            .map(|s| {
                UserId::parse(&s).map_err(|_| ApiError::invalid_query("Invalid 'author' id format"))
            })
            .transpose()?;

        let tag_id = params
            .tag
            .map(|s| TagId::parse(&s).map_err(|_| ApiError::invalid_query("Invalid 'tag' id format")))
            .transpose()?;

        Ok(PostListing(PostFilter {
            sort,
            search: params.search,
            author_id,
            tag_id,
            page: params.page.unwrap_or(1).max(1),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PostListing
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PostListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        PostListing::try_from(params)
    }
}
