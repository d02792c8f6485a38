//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest};

pub use responses::{
    ActorResponse, CommentResponse, HealthChecks, HealthResponse, LikedPostsResponse,
    MarkReadResponse, NotificationFeedResponse, NotificationResponse, PostDetailResponse,
    PostListResponse, PostResponse, ReactionResponse, ReadinessResponse, TagListResponse,
    TagPostsResponse, TagResponse, UnreadCountResponse,
};
