//! In-memory IdentityStore, PostRepository, TagRepository and CommentRepository

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use forum_core::entities::{Comment, NewComment, NewPost, Post, PostStatus, Tag, User};
use forum_core::error::DomainError;
use forum_core::traits::{
    CommentRepository, IdentityStore, PostRepository, RepoResult, TagRepository,
};
use forum_core::value_objects::{
    CommentId, PostFilter, PostId, PostSort, ReactionCounts, SortKey, Subject, TagId, UserId,
};

use crate::store::MemoryStore;

/// Listing order: the requested key first, then newest first
fn listing_order(sort: PostSort, a: &Post, b: &Post) -> Ordering {
    let newest_first = b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id));
    let primary = match sort.key() {
        SortKey::CreatedAt if sort.is_descending() => return newest_first,
        SortKey::CreatedAt => return newest_first.reverse(),
        SortKey::Likes => a.counts.like_count.cmp(&b.counts.like_count),
        SortKey::Dislikes => a.counts.dislike_count.cmp(&b.counts.dislike_count),
    };
    let primary = if sort.is_descending() { primary.reverse() } else { primary };
    primary.then(newest_first)
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_user(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.content.lock().await.users.get(&id).cloned())
    }

    async fn usernames(&self, ids: &[UserId]) -> RepoResult<HashMap<UserId, String>> {
        let state = self.content.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id).map(|u| (*id, u.username.clone())))
            .collect())
    }

    async fn post_owner(&self, post_id: PostId) -> RepoResult<Option<UserId>> {
        Ok(self
            .content
            .lock()
            .await
            .posts
            .get(&post_id)
            .map(|p| p.author_id))
    }

    async fn comment_owner(&self, comment_id: CommentId) -> RepoResult<Option<(UserId, PostId)>> {
        Ok(self
            .content
            .lock()
            .await
            .comments
            .get(&comment_id)
            .map(|c| (c.author_id, c.post_id)))
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.content.lock().await.posts.get(&id).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> RepoResult<Vec<Post>> {
        let state = self.content.lock().await;
        let tag = match filter.tag_id {
            Some(id) => match state.tags.get(&id) {
                Some(name) => Some(name.as_str()),
                None => return Ok(Vec::new()),
            },
            None => None,
        };
        let needle = filter.search_term().map(str::to_lowercase);

        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.status == PostStatus::Published)
            .filter(|p| filter.author_id.is_none_or(|author| p.author_id == author))
            .filter(|p| tag.is_none_or(|name| p.tags.iter().any(|t| t == name)))
            .filter(|p| {
                needle.as_deref().is_none_or(|n| {
                    p.title.to_lowercase().contains(n) || p.content.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| listing_order(filter.sort, a, b));

        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.limit()).unwrap_or(usize::MAX);
        Ok(posts.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut state = self.content.lock().await;
        if !state.users.contains_key(&post.author_id) {
            return Err(DomainError::DatabaseError(
                "insert on posts violates foreign key author_id".to_string(),
            ));
        }

        state.register_tags(&post.tags);
        let now = Utc::now();
        let created = Post {
            id: state.allocate_post_id(),
            author_id: post.author_id,
            title: post.title.clone(),
            content: post.content.clone(),
            status: post.status,
            counts: ReactionCounts::default(),
            tags: post.tags.clone(),
            created_at: now,
            updated_at: now,
        };
        state.posts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut state = self.content.lock().await;
        let stored = state
            .posts
            .get_mut(&post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;

        stored.title.clone_from(&post.title);
        stored.content.clone_from(&post.content);
        stored.status = post.status;
        stored.tags.clone_from(&post.tags);
        stored.updated_at = post.updated_at;
        state.register_tags(&post.tags);
        Ok(())
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let mut state = self.content.lock().await;
        let mut activities = self.activities.lock().await;

        if state.posts.remove(&id).is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        let comment_ids: Vec<CommentId> = state
            .comments
            .values()
            .filter(|c| c.post_id == id)
            .map(|c| c.id)
            .collect();
        for comment_id in &comment_ids {
            state.comments.remove(comment_id);
        }
        state.reactions.retain(|(subject, _), _| match subject {
            Subject::Post(post_id) => *post_id != id,
            Subject::Comment(comment_id) => !comment_ids.contains(comment_id),
        });
        activities.rows.retain(|a| a.target_id != id);
        Ok(())
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let state = self.content.lock().await;
        let mut tags: Vec<Tag> = state
            .tags
            .iter()
            .map(|(id, name)| Tag {
                id: *id,
                name: name.clone(),
                post_count: state.tag_usage(name),
            })
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn find_by_id(&self, id: TagId) -> RepoResult<Option<Tag>> {
        let state = self.content.lock().await;
        Ok(state.tags.get(&id).map(|name| Tag {
            id,
            name: name.clone(),
            post_count: state.tag_usage(name),
        }))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.content.lock().await.comments.get(&id).cloned())
    }

    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let state = self.content.lock().await;
        Ok(state
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut state = self.content.lock().await;
        if !state.posts.contains_key(&comment.post_id) {
            return Err(DomainError::DatabaseError(
                "insert on comments violates foreign key post_id".to_string(),
            ));
        }

        let now = Utc::now();
        let created = Comment {
            id: state.allocate_comment_id(),
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content.clone(),
            counts: ReactionCounts::default(),
            created_at: now,
            updated_at: now,
        };
        state.comments.insert(created.id, created.clone());
        Ok(created)
    }
}
