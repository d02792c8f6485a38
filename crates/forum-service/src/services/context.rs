//! Service context - dependency container for services
//!
//! Holds the repositories and shared helpers every service needs. Nothing is
//! cached here; each repository call goes to storage.

use std::sync::Arc;

use forum_common::auth::JwtService;
use forum_common::ForumConfig;
use forum_core::traits::{
    ActivityRepository, CommentRepository, IdentityStore, PostRepository, ReactionStore,
    TagRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone: every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    identity: Arc<dyn IdentityStore>,
    reaction_store: Arc<dyn ReactionStore>,
    activity_repo: Arc<dyn ActivityRepository>,
    post_repo: Arc<dyn PostRepository>,
    tag_repo: Arc<dyn TagRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    forum: ForumConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        reaction_store: Arc<dyn ReactionStore>,
        activity_repo: Arc<dyn ActivityRepository>,
        post_repo: Arc<dyn PostRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        jwt_service: Arc<JwtService>,
        forum: ForumConfig,
    ) -> Self {
        Self {
            identity,
            reaction_store,
            activity_repo,
            post_repo,
            tag_repo,
            comment_repo,
            jwt_service,
            forum,
        }
    }

    // === Repositories ===

    /// Get the user/post/comment ownership lookups
    pub fn identity(&self) -> &dyn IdentityStore {
        self.identity.as_ref()
    }

    /// Get the reaction ledger and counter store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    /// Get the activity repository
    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    /// Maximum comment length in characters
    pub fn comment_max_length(&self) -> usize {
        self.forum.comment_max_length
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("forum", &self.forum)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    identity: Option<Arc<dyn IdentityStore>>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    forum: Option<ForumConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(mut self, store: Arc<dyn IdentityStore>) -> Self {
        self.identity = Some(store);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    /// Use one backend for every repository
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: IdentityStore
            + ReactionStore
            + ActivityRepository
            + PostRepository
            + TagRepository
            + CommentRepository
            + 'static,
    {
        self.identity(store.clone())
            .reaction_store(store.clone())
            .activity_repo(store.clone())
            .post_repo(store.clone())
            .tag_repo(store.clone())
            .comment_repo(store)
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn forum_config(mut self, forum: ForumConfig) -> Self {
        self.forum = Some(forum);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.identity
                .ok_or_else(|| ServiceError::validation("identity is required"))?,
            self.reaction_store
                .ok_or_else(|| ServiceError::validation("reaction_store is required"))?,
            self.activity_repo
                .ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.tag_repo
                .ok_or_else(|| ServiceError::validation("tag_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.forum.unwrap_or_default(),
        ))
    }
}
