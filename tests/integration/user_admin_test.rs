//! Integration tests for administrative user management.

use http::StatusCode;

use crate::helpers::TestApp;

async fn admin_token(app: &TestApp) -> String {
    app.create_test_user("the_admin", "password123", 0).await;
    app.login("the_admin", "password123").await
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_users_is_paginated() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;

    for i in 0..5 {
        app.create_test_user(&format!("listed_{i}"), "password123", 1)
            .await;
    }

    let response = app
        .request("GET", "/api/users?page=1&size=3", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(response.body["data"]["total"], 6);
    assert_eq!(response.body["data"]["per_page"], 3);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_change_permission() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;
    let target = app.create_test_user("promotee", "password123", 5).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target}/permission"),
            Some(serde_json::json!({ "permission": 1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["permission"], 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_change_permission_rejects_negative() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;
    let target = app.create_test_user("negtarget", "password123", 1).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target}/permission"),
            Some(serde_json::json!({ "permission": -1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_change_permission_unknown_user() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;

    let response = app
        .request(
            "PUT",
            "/api/users/9999/permission",
            Some(serde_json::json!({ "permission": 1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_permission_change_does_not_touch_outstanding_tokens() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;
    let target = app.create_test_user("demotee", "password123", 0).await;
    let target_token = app.login("demotee", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target}/permission"),
            Some(serde_json::json!({ "permission": 10 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The old token still carries level 0 until it expires or is
    // re-issued at the next login.
    let response = app
        .request("GET", "/api/users", None, Some(&target_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fresh_token = app.login("demotee", "password123").await;
    let response = app
        .request("GET", "/api/users", None, Some(&fresh_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_user_removes_their_comments() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;
    let target = app.create_test_user("commenter", "password123", 1).await;
    app.create_test_comment(target, 1, "first").await;
    app.create_test_comment(target, 2, "second").await;

    let response = app
        .request("DELETE", &format!("/api/users/{target}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let remaining = app.comments.count_by_user(target).await.unwrap();
    assert_eq!(remaining, 0);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
        .bind(target)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_failed_comment_delete_keeps_user_row() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;
    let target = app.create_test_user("survivor", "password123", 1).await;
    app.create_test_comment(target, 1, "still here").await;

    // Make the comment delete fail so the cascade transaction rolls back.
    sqlx::query(
        "CREATE OR REPLACE FUNCTION refuse_comment_delete() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'comment deletes disabled'; END; \
         $$ LANGUAGE plpgsql",
    )
    .execute(&app.db_pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER refuse_comment_delete BEFORE DELETE ON comments \
         FOR EACH ROW EXECUTE FUNCTION refuse_comment_delete()",
    )
    .execute(&app.db_pool)
    .await
    .unwrap();

    let response = app
        .request("DELETE", &format!("/api/users/{target}"), None, Some(&token))
        .await;

    // Restore the table before asserting so a failure here cannot poison
    // later tests.
    sqlx::query("DROP TRIGGER refuse_comment_delete ON comments")
        .execute(&app.db_pool)
        .await
        .unwrap();
    sqlx::query("DROP FUNCTION refuse_comment_delete")
        .execute(&app.db_pool)
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
        .bind(target)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(users, 1);

    let remaining = app.comments.count_by_user(target).await.unwrap();
    assert_eq!(remaining, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let token = admin_token(&app).await;

    let response = app
        .request("DELETE", "/api/users/4242", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_own_avatar() {
    let app = TestApp::new().await;
    app.create_test_user("avataruser", "password123", 1).await;
    let token = app.login("avataruser", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me/avatar",
            Some(serde_json::json!({ "filename": "avatar-42.png" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body["data"]["avatar"], "avatar-42.png");
}
