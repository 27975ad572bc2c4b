//! Common Test Utilities
//!
//! Shared helpers and fixtures. Every `TestApp` owns a fresh in-memory store
//! and request counter, so tests never see each other's data.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use chirpy::config::Settings;
use chirpy::startup::{build_router, AppState};

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Application in production mode
    pub fn new() -> Self {
        Self::with_overrides(&[])
    }

    /// Application in dev mode
    pub fn dev() -> Self {
        Self::with_overrides(&[("platform", "dev")])
    }

    /// Application built from the default settings plus `overrides`
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Self {
        let static_root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
        let mut all = vec![
            ("server.static_root", static_root),
            ("auth.memory_kib", "1024"),
        ];
        all.extend_from_slice(overrides);

        let settings = Settings::with_overrides(&all).unwrap();
        let state = AppState::in_memory(settings).unwrap();

        Self {
            router: build_router(state),
        }
    }

    /// Send a request without a body
    pub async fn request(&self, method: &str, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.request("GET", uri).await
    }

    /// Make a POST request without a body
    pub async fn post(&self, uri: &str) -> Response {
        self.request("POST", uri).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.request("DELETE", uri).await
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.post_raw(uri, &body.to_string()).await
    }

    /// Register a user and return the response body
    pub async fn create_user(&self, email: &str, password: &str) -> Value {
        let response = self
            .post_json("/api/users", &json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    /// Post a chirp and return the response
    pub async fn create_chirp(&self, body: &str, user_id: &str) -> Response {
        self.post_json("/api/chirps", &json!({ "body": body, "user_id": user_id }))
            .await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Test user credentials
pub struct TestUser {
    pub email: &'static str,
    pub password: &'static str,
}

pub const TEST_USER: TestUser = TestUser {
    email: "test@example.com",
    password: "TestPassword123!",
};

/// Generate a unique test email
pub fn unique_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}
