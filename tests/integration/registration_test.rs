//! Integration tests for registration and identifier reuse.

use http::StatusCode;

use crate::helpers::TestApp;

fn register_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "password123",
    })
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_creates_member() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register_body("newmember")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "newmember");
    assert_eq!(response.body["data"]["permission"], 1);

    // The new account can log in straight away.
    app.login("newmember", "password123").await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    app.create_test_user("taken", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register_body("taken")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.create_test_user("original", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "different",
                "email": "original@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_invalid_email_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "bademail",
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_empty_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "emptypw",
                "email": "emptypw@test.com",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// Any non-empty password is accepted; strength is not judged here.
#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_accepts_short_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "shortpw",
                "email": "shortpw@test.com",
                "password": "abc",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    app.login("shortpw", "abc").await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_reuses_lowest_gap_id() {
    let app = TestApp::new().await;
    let admin_id = app.create_test_user("gapadmin", "password123", 0).await;
    let token = app.login("gapadmin", "password123").await;

    let a = app.create_test_user("user_a", "password123", 1).await;
    let b = app.create_test_user("user_b", "password123", 1).await;
    let c = app.create_test_user("user_c", "password123", 1).await;
    assert!(admin_id < a && a < b && b < c);

    // Deleting the middle user leaves a gap below the maximum.
    let response = app
        .request("DELETE", &format!("/api/users/{b}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register_body("gap_filler")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], b);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_without_gap_appends() {
    let app = TestApp::new().await;
    let first = app.create_test_user("dense_a", "password123", 1).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register_body("dense_b")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let new_id = response.body["data"]["id"].as_i64().expect("id");
    assert!(new_id > first);
}
