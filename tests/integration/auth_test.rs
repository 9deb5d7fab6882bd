//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.create_test_user("testuser", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "testuser");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_response_never_contains_digest() {
    let app = TestApp::new().await;
    app.create_test_user("secretuser", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "secretuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.create_test_user("testuser2", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let app = TestApp::new().await;
    app.create_test_user("realuser", "password123", 1).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "realuser",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "ghostuser",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_empty_username_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    app.create_test_user("meuser", "password123", 1).await;
    let token = app.login("meuser", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "meuser");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
