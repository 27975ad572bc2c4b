//! Admin API Tests

use axum::http::{header::CONTENT_TYPE, StatusCode};
use serde_json::json;

use crate::common::{body_json, body_text, TestApp, TEST_USER};

#[tokio::test]
async fn test_healthz_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/admin/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_metrics_starts_at_zero() {
    let app = TestApp::new();

    let response = app.get("/admin/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body_text(response)
        .await
        .contains("Chirpy has been visited 0 times!"));
}

#[tokio::test]
async fn test_static_requests_are_counted() {
    let app = TestApp::new();

    let first = app.get("/app/").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert!(body_text(first).await.contains("Welcome to Chirpy"));

    app.get("/app/index.html").await;
    app.get("/app/missing.css").await;

    // Only /app/ traffic counts
    app.get("/admin/healthz").await;
    app.get("/api/chirps").await;

    let page = body_text(app.get("/admin/metrics").await).await;
    assert!(page.contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/app/missing.css").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_outside_dev_is_forbidden_and_keeps_state() {
    let app = TestApp::new();
    app.get("/app/").await;
    app.create_user(TEST_USER.email, TEST_USER.password).await;

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_json(response).await["message"].is_string());

    let page = body_text(app.get("/admin/metrics").await).await;
    assert!(page.contains("Chirpy has been visited 1 times!"));

    let login = app
        .post_json(
            "/api/login",
            &json!({ "email": TEST_USER.email, "password": TEST_USER.password }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reset_in_dev_zeroes_counter_and_deletes_users() {
    let app = TestApp::dev();
    app.get("/app/").await;
    app.get("/app/").await;
    app.create_user(TEST_USER.email, TEST_USER.password).await;

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hits reset to 0");

    let page = body_text(app.get("/admin/metrics").await).await;
    assert!(page.contains("Chirpy has been visited 0 times!"));

    // The email is free again
    app.create_user(TEST_USER.email, TEST_USER.password).await;
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/nothing-here").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
