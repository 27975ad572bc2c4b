//! Chirp API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{body_json, unique_email, TestApp};

async fn app_with_author() -> (TestApp, String) {
    let app = TestApp::new();
    let user = app.create_user(&unique_email(), "secret").await;
    let id = user["id"].as_str().unwrap().to_string();
    (app, id)
}

fn bodies(chirps: &Value) -> Vec<&str> {
    chirps
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_then_fetch_chirp() {
    let (app, user_id) = app_with_author().await;

    let response = app.create_chirp("Hello, world!", &user_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["body"], "Hello, world!");
    assert_eq!(created["user_id"], user_id.as_str());

    let id = created["id"].as_str().unwrap();
    let response = app.get(&format!("/api/chirps/{}", id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_profanity_is_masked_before_storing() {
    let (app, user_id) = app_with_author().await;

    let response = app
        .create_chirp(
            "This is a kerfuffle opinion I need to share with the world",
            &user_id,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(
        created["body"],
        "This is a **** opinion I need to share with the world"
    );

    let listed = body_json(app.get("/api/chirps").await).await;
    assert_eq!(
        bodies(&listed),
        ["This is a **** opinion I need to share with the world"]
    );
}

#[test_case(140, StatusCode::CREATED ; "at the limit")]
#[test_case(141, StatusCode::BAD_REQUEST ; "one over the limit")]
#[tokio::test]
async fn test_chirp_length_limit(length: usize, expected: StatusCode) {
    let (app, user_id) = app_with_author().await;

    let response = app.create_chirp(&"a".repeat(length), &user_id).await;

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_too_long_chirp_is_not_stored() {
    let (app, user_id) = app_with_author().await;

    let response = app.create_chirp(&"kerfuffle ".repeat(15), &user_id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Chirp is too long");

    let listed = body_json(app.get("/api/chirps").await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chirp_for_unknown_author_is_rejected() {
    let app = TestApp::new();

    let response = app
        .create_chirp("hello", &uuid::Uuid::new_v4().to_string())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_chirp_request_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/chirps", &json!({ "body": "hi", "user_id": "42" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test_case("/api/chirps/00000000-0000-0000-0000-000000000000" ; "unknown id")]
#[test_case("/api/chirps/not-a-uuid" ; "malformed id")]
#[tokio::test]
async fn test_missing_chirp_is_not_found(uri: &str) {
    let app = TestApp::new();

    let response = app.get(uri).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn test_list_chirps_in_creation_order() {
    let (app, alice) = app_with_author().await;
    let bob = app.create_user(&unique_email(), "secret").await;
    let bob = bob["id"].as_str().unwrap();

    for (body, author) in [("one", alice.as_str()), ("two", bob), ("three", alice.as_str())] {
        let response = app.create_chirp(body, author).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = body_json(app.get("/api/chirps").await).await;
    assert_eq!(bodies(&all), ["one", "two", "three"]);

    let desc = body_json(app.get("/api/chirps?sort=desc").await).await;
    assert_eq!(bodies(&desc), ["three", "two", "one"]);

    let by_alice = body_json(app.get(&format!("/api/chirps?author_id={}", alice)).await).await;
    assert_eq!(bodies(&by_alice), ["one", "three"]);
}

#[tokio::test]
async fn test_list_chirps_with_invalid_sort_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/chirps?sort=sideways").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_chirps_empty() {
    let app = TestApp::new();

    let response = app.get("/api/chirps").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
