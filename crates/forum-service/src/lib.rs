//! # forum-service
//!
//! Application layer: the reaction/notification engine, post and comment use
//! cases, and the DTOs the API serializes.

pub mod dto;
pub mod services;

pub use services::{
    CommentService, FeedService, NotificationEmitter, NotifyOutcome, PostService,
    ReactionOutcome, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TagService,
};
