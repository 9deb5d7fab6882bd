//! Integration tests for route-level permission gating.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_member_cannot_access_admin_routes() {
    let app = TestApp::new().await;
    app.create_test_user("plainmember", "password123", 1).await;
    let token = app.login("plainmember", "password123").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_can_access_admin_routes() {
    let app = TestApp::new().await;
    app.create_test_user("bigadmin", "password123", 0).await;
    let token = app.login("bigadmin", "password123").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_routes_require_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_tampered_token_is_unauthorized_not_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("tamperadmin", "password123", 0).await;
    let token = app.login("tamperadmin", "password123").await;

    // Flip one character in the signature segment.
    let mut tampered = token.clone().into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let response = app
        .request("GET", "/api/users", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_passes_member_routes() {
    let app = TestApp::new().await;
    app.create_test_user("adminhere", "password123", 0).await;
    let token = app.login("adminhere", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["permission"], 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_health_needs_no_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
