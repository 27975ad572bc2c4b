//! Authentication API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, unique_email, TestApp};

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();
    let user = app.create_user("a@b.com", "x").await;

    let response = app
        .post_json("/api/login", &json!({ "email": "a@b.com", "password": "x" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["email"], "a@b.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.create_user("a@b.com", "x").await;

    let response = app
        .post_json("/api/login", &json!({ "email": "a@b.com", "password": "y" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["message"],
        "Incorrect email or password"
    );
}

#[tokio::test]
async fn test_login_with_unknown_email_is_lookup_failure() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/login",
            &json!({ "email": unique_email(), "password": "x" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "Internal server error");
}

#[tokio::test]
async fn test_login_without_stored_hash_is_denied_by_default() {
    let app = TestApp::new();
    let email = unique_email();
    app.post_json("/api/users", &json!({ "email": email }))
        .await;

    let response = app
        .post_json("/api/login", &json!({ "email": email, "password": "anything" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_without_stored_hash_allowed_by_policy() {
    let app = TestApp::with_overrides(&[("auth.missing_hash_policy", "allow")]);
    let email = unique_email();
    app.post_json("/api/users", &json!({ "email": email }))
        .await;

    let response = app
        .post_json("/api/login", &json!({ "email": email, "password": "anything" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], email);
}

#[tokio::test]
async fn test_login_with_missing_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/login", &json!({ "email": "a@b.com" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
