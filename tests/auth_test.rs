//! Integration tests for registration, login, and token handling.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_defaults_to_user_role() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
                "plate_number": "51B-987.65",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["role"], "user");
    // The password hash never leaves the server.
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "password": "short",
                "plate_number": "51B-987.65",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "mallory",
                "password": "password123",
                "plate_number": "51B-987.65",
                "role": "superadmin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ROLE");
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = helpers::TestApp::new();
    app.register("alice", "password123", None).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password456",
                "plate_number": "51B-000.00",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.register("alice", "password123", None).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert!(response.body["data"]["expires_at"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.register("alice", "password123", None).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.login_as("alice", "staff").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["role"], "staff");
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = helpers::TestApp::new();
    let token = app.login_as("alice", "user").await;

    // Flip the signature portion of the token.
    let mut parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    let tampered_sig = parts[2].to_string().chars().rev().collect::<String>();
    parts[2] = &tampered_sig;
    let tampered = parts.join(".");

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
