//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, unique_email, TestApp, TEST_USER};

#[tokio::test]
async fn test_create_user_returns_user_without_password() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            &json!({ "email": TEST_USER.email, "password": TEST_USER.password }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], TEST_USER.email);
    assert!(body["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());

    let fields = body.as_object().unwrap();
    assert!(!fields.contains_key("password"));
    assert!(!fields.contains_key("password_hash"));
}

#[tokio::test]
async fn test_create_user_without_password() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/users", &json!({ "email": unique_email() }))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    let first = app.create_user(TEST_USER.email, TEST_USER.password).await;

    let response = app
        .post_json(
            "/api/users",
            &json!({ "email": TEST_USER.email, "password": "other" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_json(response).await["message"].is_string());

    // The first registration keeps its password
    let login = app
        .post_json(
            "/api/login",
            &json!({ "email": TEST_USER.email, "password": TEST_USER.password }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
    assert_eq!(body_json(login).await["id"], first["id"]);
}

#[tokio::test]
async fn test_create_user_with_invalid_email_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            &json!({ "email": "not-an-email", "password": "x" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_with_malformed_json_fails() {
    let app = TestApp::new();

    let response = app.post_raw("/api/users", "{\"email\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn test_delete_users_outside_dev_is_forbidden() {
    let app = TestApp::new();
    app.create_user(TEST_USER.email, TEST_USER.password).await;

    let response = app.delete("/api/users").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_users_in_dev_removes_everyone() {
    let app = TestApp::dev();
    app.create_user(TEST_USER.email, TEST_USER.password).await;

    let response = app.delete("/api/users").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The email is free again
    app.create_user(TEST_USER.email, "new password").await;
}
