//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn create_post(server: &TestServer, token: &str) -> PostResponse {
    let response = server
        .post_auth("/api/v1/posts", token, &CreatePostRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn react(server: &TestServer, token: &str, subject: &str, id: i64, action: &str) -> ReactionResponse {
    let response = server
        .post_empty_auth(&format!("/api/v1/reaction/{subject}/{id}/{action}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn unread(server: &TestServer, token: &str) -> i64 {
    let response = server.get_auth("/api/v1/notifications/count", token).await.unwrap();
    let body: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    body.count
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_dislike_remove_cycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (_actor_id, actor) = server.seed_user("actor").await.unwrap();
    let post = create_post(&server, &owner).await;

    let liked = react(&server, &actor, "post", post.id, "like").await;
    assert!(liked.success);
    assert_eq!((liked.like_count, liked.dislike_count), (1, 0));
    assert_eq!(liked.user_action, "like");
    assert_eq!(unread(&server, &owner).await, 1);

    let again = react(&server, &actor, "post", post.id, "like").await;
    assert_eq!((again.like_count, again.dislike_count), (1, 0));
    assert_eq!(unread(&server, &owner).await, 1);

    let disliked = react(&server, &actor, "post", post.id, "dislike").await;
    assert_eq!((disliked.like_count, disliked.dislike_count), (0, 1));
    assert_eq!(disliked.user_action, "dislike");
    assert_eq!(unread(&server, &owner).await, 2);

    let removed = react(&server, &actor, "post", post.id, "remove").await;
    assert_eq!((removed.like_count, removed.dislike_count), (0, 0));
    assert_eq!(removed.user_action, "none");
    assert_eq!(unread(&server, &owner).await, 2);
}

#[tokio::test]
async fn test_own_post_reaction_does_not_notify() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let post = create_post(&server, &owner).await;

    let liked = react(&server, &owner, "post", post.id, "like").await;
    assert_eq!(liked.like_count, 1);
    assert_eq!(unread(&server, &owner).await, 0);
}

#[tokio::test]
async fn test_concurrent_likes_keep_counter_consistent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let post = create_post(&server, &owner).await;

    let mut tokens = Vec::new();
    for _ in 0..8 {
        tokens.push(server.seed_user("fan").await.unwrap().1);
    }

    // Each user likes twice concurrently; only one like per user may count
    let requests = tokens
        .iter()
        .flat_map(|token| [token, token])
        .map(|token| react(&server, token, "post", post.id, "like"));
    join_all(requests).await;

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &owner)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.post.like_count, 8);
    assert_eq!(unread(&server, &owner).await, 8);
}

#[tokio::test]
async fn test_comment_reaction_targets_parent_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (_commenter_id, commenter) = server.seed_user("commenter").await.unwrap();
    let (_actor_id, actor) = server.seed_user("actor").await.unwrap();
    let post = create_post(&server, &owner).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &commenter,
            &CreateCommentRequest {
                content: "First!".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let liked = react(&server, &actor, "comment", comment.id, "like").await;
    assert_eq!(liked.like_count, 1);

    let response = server.get_auth("/api/v1/notifications", &commenter).await.unwrap();
    let feed: NotificationFeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.notifications.len(), 1);
    assert_eq!(feed.notifications[0].kind, "like");
    assert_eq!(feed.notifications[0].target_id, post.id);
}

#[tokio::test]
async fn test_reaction_errors() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_user_id, token) = server.seed_user("user").await.unwrap();

    let response = server
        .post_empty_auth("/api/v1/reaction/post/999999999/like", &token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_POST");

    let response = server
        .post_empty_auth("/api/v1/reaction/post/1/love", &token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_ACTION");
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_feed_read_and_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (_actor_id, actor) = server.seed_user("actor").await.unwrap();
    let post = create_post(&server, &owner).await;
    react(&server, &actor, "post", post.id, "like").await;

    let response = server.get_auth("/api/v1/notifications", &owner).await.unwrap();
    let feed: NotificationFeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.unread_count, 1);
    assert!(feed.notifications[0].message.ends_with("liked your post"));
    let id = feed.notifications[0].id;

    let response = server
        .post_empty_auth("/api/v1/notifications/mark-read", &owner)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread(&server, &owner).await, 0);

    let path = format!("/api/v1/notifications/{id}");
    let response = server.delete_auth(&path, &actor).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &owner).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &owner).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleting_actor_removes_their_notifications() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (actor_id, actor) = server.seed_user("actor").await.unwrap();
    let post = create_post(&server, &owner).await;
    react(&server, &actor, "post", post.id, "dislike").await;
    assert_eq!(unread(&server, &owner).await, 1);

    server.delete_user(actor_id).await.unwrap();

    let response = server.get_auth("/api/v1/notifications", &owner).await.unwrap();
    let feed: NotificationFeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed
        .notifications
        .iter()
        .all(|n| n.actor.id != actor_id.into_inner()));
    assert_eq!(feed.unread_count, 0);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (_actor_id, actor) = server.seed_user("actor").await.unwrap();
    let post = create_post(&server, &owner).await;
    react(&server, &actor, "post", post.id, "like").await;

    let response = server
        .get_auth("/api/v1/users/@me/liked-posts", &actor)
        .await
        .unwrap();
    let liked: LikedPostsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.post_ids, vec![post.id]);

    let path = format!("/api/v1/posts/{}", post.id);
    let response = server
        .patch_auth(&path, &actor, &serde_json::json!({"title": "Not yours"}))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_POST_AUTHOR");

    let response = server
        .patch_auth(&path, &owner, &serde_json::json!({"title": "Edited"}))
        .await
        .unwrap();
    let edited: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.title, "Edited");

    let response = server.delete_auth(&path, &owner).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/notifications", &owner).await.unwrap();
    let feed: NotificationFeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.notifications.iter().all(|n| n.target_id != post.id));

    let response = server.get_auth("/api/v1/users/@me/activity", &owner).await.unwrap();
    let history: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history[0].kind, "delete_post");
    assert!(history[0].is_read);
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_listing_sorts_by_reactions_and_filters_by_tag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, owner) = server.seed_user("owner").await.unwrap();
    let (_fan_id, fan) = server.seed_user("fan").await.unwrap();
    let tag = format!("tag{}", unique_suffix());

    let response = server
        .post_auth("/api/v1/posts", &owner, &CreatePostRequest::tagged(&[&tag]))
        .await
        .unwrap();
    let tagged: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(tagged.tags, vec![tag.clone()]);
    let plain = create_post(&server, &owner).await;

    react(&server, &fan, "post", tagged.id, "like").await;

    let listing = |sort: &'static str| {
        let server = &server;
        let owner = &owner;
        async move {
            let response = server
                .get_auth(&format!("/api/v1/posts?author={owner_id}&sort={sort}"), owner)
                .await
                .unwrap();
            let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
            assert_eq!(page.sort, sort);
            page.posts.iter().map(|p| p.id).collect::<Vec<_>>()
        }
    };

    assert_eq!(listing("likes_desc").await, vec![tagged.id, plain.id]);
    assert_eq!(listing("likes_asc").await, vec![plain.id, tagged.id]);
    assert_eq!(listing("date_desc").await, vec![plain.id, tagged.id]);

    react(&server, &fan, "post", tagged.id, "dislike").await;
    assert_eq!(listing("dislikes_desc").await, vec![tagged.id, plain.id]);

    let response = server.get("/api/v1/tags").await.unwrap();
    let tags: TagListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let created = tags.tags.iter().find(|t| t.name == tag).expect("tag is listed");
    assert_eq!(created.post_count, 1);

    let response = server
        .get(&format!("/api/v1/posts?tag={}", created.id))
        .await
        .unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].id, tagged.id);

    let response = server.get("/api/v1/posts?sort=hot").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
}
