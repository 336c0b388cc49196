//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return (request, auth)
async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a game owned by the given token's account
async fn create_game(server: &TestServer, token: &str) -> GameResponse {
    let request = CreateGameRequest::unique();
    let response = server
        .post_auth("/api/v1/games", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert!(auth.user.is_active);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let login_req = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let login_req = LoginRequest {
        username: request.username,
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_deactivated_account_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    // Deactivate own account
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", request.username), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // An inactive account exists but may not log in: 403, not 404/401
    let login_req = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .get(&format!("/api/v1/users/{}", request.username))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, request.username);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/no-such-user").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let patch = serde_json::json!({ "city": "Denver", "state": "CO" });
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", request.username),
            &auth.access_token,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_rejects_unknown_field() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    // is_admin is not on the allow-list; the whole patch must be rejected
    let patch = serde_json::json!({ "city": "Denver", "is_admin": true });
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", request.username),
            &auth.access_token,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_other_user_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;

    let patch = serde_json::json!({ "city": "Denver" });
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}", request_b.username),
            &auth_a.access_token,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_toggle_is_an_involution() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;

    let path = format!("/api/v1/users/{}/follow", request_b.username);

    // First toggle creates the edge
    let response = server.post_auth(&path, &auth_a.access_token, &()).await.unwrap();
    let toggle: FollowToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.following);

    // Second toggle removes it again
    let response = server.post_auth(&path, &auth_a.access_token, &()).await.unwrap();
    let toggle: FollowToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.following);
}

#[tokio::test]
async fn test_followers_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;

    server
        .post_auth(
            &format!("/api/v1/users/{}/follow", request_b.username),
            &auth_a.access_token,
            &(),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/followers", request_b.username))
        .await
        .unwrap();
    let followers: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(followers.iter().any(|u| u.username == request_a.username));
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_create_game_enrolls_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let game = create_game(&server, &auth.access_token).await;
    assert_eq!(game.creator_username, request.username);
    assert_eq!(game.status, "pending");

    let response = server
        .get(&format!("/api/v1/games/{}/players", game.id))
        .await
        .unwrap();
    let players: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(players.iter().any(|p| p.username == request.username));
}

#[tokio::test]
async fn test_join_and_leave_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/join", game.id),
            &auth_b.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/games/{}/players", game.id))
        .await
        .unwrap();
    let players: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(players.iter().any(|p| p.username == request_b.username));

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/leave", game.id),
            &auth_b.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/games/{}/players", game.id))
        .await
        .unwrap();
    let players: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!players.iter().any(|p| p.username == request_b.username));
}

#[tokio::test]
async fn test_deactivate_game_requires_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (_, auth_b) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    let response = server
        .delete_auth(&format!("/api/v1/games/{}", game.id), &auth_b.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/games/{}", game.id), &auth_a.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_are_listed_oldest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let game = create_game(&server, &auth.access_token).await;

    for body in ["first", "second", "third"] {
        let response = server
            .post_auth(
                &format!("/api/v1/games/{}/comments", game.id),
                &auth.access_token,
                &serde_json::json!({ "body": body }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/games/{}/comments", game.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_removed_comment_disappears_for_everyone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let game = create_game(&server, &auth.access_token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &auth.access_token,
            &serde_json::json!({ "body": "oops" }),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/games/{}/comments", game.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!comments.iter().any(|c| c.id == comment.id));
}

// ============================================================================
// Invite Tests
// ============================================================================

#[tokio::test]
async fn test_create_invite() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    let response = server
        .post_auth(
            "/api/v1/invites",
            &auth_a.access_token,
            &serde_json::json!({ "game_id": game.id, "to_username": request_b.username }),
        )
        .await
        .unwrap();
    let invite: InviteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(invite.from_username, request_a.username);
    assert_eq!(invite.to_username, request_b.username);
    assert_eq!(invite.status, "pending");
}

#[tokio::test]
async fn test_invite_to_inactive_game_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    // Deactivate the game, then invite into it
    server
        .delete_auth(&format!("/api/v1/games/{}", game.id), &auth_a.access_token)
        .await
        .unwrap();

    let response = server
        .post_auth(
            "/api/v1/invites",
            &auth_a.access_token,
            &serde_json::json!({ "game_id": game.id, "to_username": request_b.username }),
        )
        .await
        .unwrap();
    // Inactive is distinct from NotFound: 403
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_pending_invite_exclusivity_honors_sender_activity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (_, auth_b) = register(&server).await;
    let (request_c, _) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;
    let invite_body = serde_json::json!({ "game_id": game.id, "to_username": request_c.username });

    // First pending invite from an active sender
    let response = server
        .post_auth("/api/v1/invites", &auth_a.access_token, &invite_body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // A second sender is blocked while the first is active
    let response = server
        .post_auth("/api/v1/invites", &auth_b.access_token, &invite_body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Deactivating the first sender unblocks the same call
    server
        .delete_auth(
            &format!("/api/v1/users/{}", request_a.username),
            &auth_a.access_token,
        )
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/invites", &auth_b.access_token, &invite_body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_invite_state_machine() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;
    let (_, auth_c) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    let response = server
        .post_auth(
            "/api/v1/invites",
            &auth_a.access_token,
            &serde_json::json!({ "game_id": game.id, "to_username": request_b.username }),
        )
        .await
        .unwrap();
    let invite: InviteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/invites/{}", invite.id);
    let accept = serde_json::json!({ "status": "accepted" });

    // The sender cannot accept their own invite
    let response = server.patch_auth(&path, &auth_a.access_token, &accept).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // A non-participant cannot accept either
    let response = server.patch_auth(&path, &auth_c.access_token, &accept).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The recipient accepts, and lands on the roster
    let response = server.patch_auth(&path, &auth_b.access_token, &accept).await.unwrap();
    let updated: InviteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "accepted");

    let response = server
        .get(&format!("/api/v1/games/{}/players", game.id))
        .await
        .unwrap();
    let players: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(players.iter().any(|p| p.username == request_b.username));

    // Accepting twice is rejected as a bad transition
    let response = server.patch_auth(&path, &auth_b.access_token, &accept).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // And a terminal invite cannot be cancelled
    let cancel = serde_json::json!({ "status": "cancelled" });
    let response = server.patch_auth(&path, &auth_a.access_token, &cancel).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_cancel_is_sender_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    let response = server
        .post_auth(
            "/api/v1/invites",
            &auth_a.access_token,
            &serde_json::json!({ "game_id": game.id, "to_username": request_b.username }),
        )
        .await
        .unwrap();
    let invite: InviteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/invites/{}", invite.id);
    let cancel = serde_json::json!({ "status": "cancelled" });

    let response = server.patch_auth(&path, &auth_b.access_token, &cancel).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.patch_auth(&path, &auth_a.access_token, &cancel).await.unwrap();
    let updated: InviteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "cancelled");
}

#[tokio::test]
async fn test_group_invite_is_atomic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;
    let (request_c, _) = register(&server).await;

    let game = create_game(&server, &auth_a.access_token).await;

    // One recipient does not exist: the whole group must fail
    let response = server
        .post_auth(
            "/api/v1/invites/group",
            &auth_a.access_token,
            &serde_json::json!({
                "game_id": game.id,
                "usernames": [request_b.username, "no-such-user"],
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // No residue: the valid recipient has received nothing
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/invites/received", request_b.username),
            &auth_b.access_token,
        )
        .await
        .unwrap();
    let invites: Vec<InviteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(invites.iter().all(|i| i.game_id != game.id));

    // A fully valid group succeeds for every recipient
    let response = server
        .post_auth(
            "/api/v1/invites/group",
            &auth_a.access_token,
            &serde_json::json!({
                "game_id": game.id,
                "usernames": [request_b.username, request_c.username],
            }),
        )
        .await
        .unwrap();
    let invites: Vec<InviteResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(invites.len(), 2);
}

#[tokio::test]
async fn test_invites_received_ordering() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    let game1 = create_game(&server, &auth_a.access_token).await;
    let game2 = create_game(&server, &auth_a.access_token).await;

    for game in [&game1, &game2] {
        server
            .post_auth(
                "/api/v1/invites",
                &auth_a.access_token,
                &serde_json::json!({ "game_id": game.id, "to_username": request_b.username }),
            )
            .await
            .unwrap();
    }

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/invites/received", request_b.username),
            &auth_b.access_token,
        )
        .await
        .unwrap();
    let invites: Vec<InviteResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Newest first
    let game_ids: Vec<i64> = invites.iter().map(|i| i.game_id).collect();
    assert_eq!(game_ids, vec![game2.id, game1.id]);
}

// ============================================================================
// Thread / Message Tests
// ============================================================================

#[tokio::test]
async fn test_thread_identity_is_set_exact() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;
    let (request_c, _) = register(&server).await;

    // a posts to {a, b, c}
    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username, request_c.username],
                "body": "hi",
            }),
        )
        .await
        .unwrap();
    let first: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // b posts to a permutation of the same set: same thread
    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_b.access_token,
            &serde_json::json!({
                "usernames": [request_c.username, request_a.username, request_b.username],
                "body": "yo",
            }),
        )
        .await
        .unwrap();
    let second: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.thread_id, second.thread_id);

    // A strict subset resolves to a different thread
    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username],
                "body": "side chat",
            }),
        )
        .await
        .unwrap();
    let subset: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_ne!(first.thread_id, subset.thread_id);
}

#[tokio::test]
async fn test_post_requires_sender_in_set() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;
    let (request_c, _) = register(&server).await;

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_b.username, request_c.username],
                "body": "not my thread",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_post_names_missing_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, "ghost-user"],
                "body": "hello?",
            }),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.text().await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("ghost-user"), "missing user not named: {body}");
}

#[tokio::test]
async fn test_tombstones_are_per_viewer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;
    let (request_c, _) = register(&server).await;

    // post({a,b,c}, a, "hi") creates thread T
    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username, request_c.username],
                "body": "hi",
            }),
        )
        .await
        .unwrap();
    let first_msg: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let thread_id = first_msg.thread_id.clone();

    // listThreadsForUser(a) returns [T]
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/threads", request_a.username),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let threads: Vec<ThreadListEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].thread_id, thread_id);

    // reply(T, b, "yo")
    let response = server
        .post_auth(
            &format!("/api/v1/threads/{}/messages", thread_id),
            &auth_b.access_token,
            &serde_json::json!({ "body": "yo" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // hideMessage(first, a): a no longer sees it
    let response = server
        .delete_auth(
            &format!("/api/v1/messages/{}", first_msg.id),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/threads/{}", thread_id),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let view_a: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!view_a.messages.iter().any(|m| m.id == first_msg.id));

    // ...but b still does
    let response = server
        .get_auth(
            &format!("/api/v1/threads/{}", thread_id),
            &auth_b.access_token,
        )
        .await
        .unwrap();
    let view_b: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(view_b.messages.iter().any(|m| m.id == first_msg.id));
}

#[tokio::test]
async fn test_messages_are_ordered_ascending() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username],
                "body": "one",
            }),
        )
        .await
        .unwrap();
    let first: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let thread_id = first.thread_id.clone();

    for (token, body) in [(&auth_b.access_token, "two"), (&auth_a.access_token, "three")] {
        server
            .post_auth(
                &format!("/api/v1/threads/{}/messages", thread_id),
                token,
                &serde_json::json!({ "body": body }),
            )
            .await
            .unwrap();
    }

    let response = server
        .get_auth(
            &format!("/api/v1/threads/{}", thread_id),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let view: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let bodies: Vec<&str> = view.messages.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_hide_thread_removes_it_from_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username],
                "body": "hello",
            }),
        )
        .await
        .unwrap();
    let msg: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let thread_id = msg.thread_id.clone();

    // a hides the whole thread
    let response = server
        .delete_auth(
            &format!("/api/v1/threads/{}", thread_id),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let hidden: HiddenMessagesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(hidden.message_ids, vec![msg.id]);

    // Threads with no visible messages drop out of a's listing
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/threads", request_a.username),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let threads: Vec<ThreadListEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!threads.iter().any(|t| t.thread_id == thread_id));

    // b's listing is untouched
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/threads", request_b.username),
            &auth_b.access_token,
        )
        .await
        .unwrap();
    let threads: Vec<ThreadListEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(threads.iter().any(|t| t.thread_id == thread_id));
}

#[tokio::test]
async fn test_thread_listing_orders_by_last_visible_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;
    let (request_c, _) = register(&server).await;

    // Two threads; the second gets the most recent message first, then the
    // first thread overtakes it
    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username],
                "body": "t1 m1",
            }),
        )
        .await
        .unwrap();
    let t1_msg: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_c.username],
                "body": "t2 m1",
            }),
        )
        .await
        .unwrap();
    let t2_msg: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/threads/{}/messages", t1_msg.thread_id),
            &auth_a.access_token,
            &serde_json::json!({ "body": "t1 m2" }),
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/threads", request_a.username),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let threads: Vec<ThreadListEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let order: Vec<&str> = threads.iter().map(|t| t.thread_id.as_str()).collect();
    assert_eq!(
        order,
        vec![t1_msg.thread_id.as_str(), t2_msg.thread_id.as_str()]
    );
    assert_eq!(threads[0].last_message.body, "t1 m2");
}

#[tokio::test]
async fn test_outsider_cannot_view_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, _) = register(&server).await;
    let (_, auth_c) = register(&server).await;

    let response = server
        .post_auth(
            "/api/v1/threads",
            &auth_a.access_token,
            &serde_json::json!({
                "usernames": [request_a.username, request_b.username],
                "body": "private",
            }),
        )
        .await
        .unwrap();
    let msg: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Outsiders get the same answer as for an unknown thread
    let response = server
        .get_auth(
            &format!("/api/v1/threads/{}", msg.thread_id),
            &auth_c.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Activity Feed Tests
// ============================================================================

#[tokio::test]
async fn test_activity_feed_follows_active_accounts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request_a, auth_a) = register(&server).await;
    let (request_b, auth_b) = register(&server).await;

    // a follows b, then b creates a game
    server
        .post_auth(
            &format!("/api/v1/users/{}/follow", request_b.username),
            &auth_a.access_token,
            &(),
        )
        .await
        .unwrap();
    create_game(&server, &auth_b.access_token).await;

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/activity", request_a.username),
            &auth_a.access_token,
        )
        .await
        .unwrap();
    let feed: UserActivityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // b's game creation shows up in a's followed feed
    assert!(feed
        .activity
        .iter()
        .any(|e| e.username == request_b.username && e.operation == "create"));

    // a's own follow event shows up in a's my_activity, newest first
    assert!(feed
        .my_activity
        .iter()
        .any(|e| e.feature == "follow" && e.operation == "follow"));
}

#[tokio::test]
async fn test_activity_requires_self_or_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .get_auth("/api/v1/users/no-such-user/activity", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
