//! Route Configuration
//!
//! Configures all HTTP routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use super::handlers;
use crate::presentation::middleware::count_hits;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // Static client bundle; every request to it is counted
    let app_files = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state.clone(), count_hits))
        .service(ServeDir::new(&state.settings.server.static_root));

    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .nest_service("/app", app_files)
        .with_state(state)
}

/// Resource routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(handlers::user::create_user).delete(handlers::user::delete_users),
        )
        .route("/login", post(handlers::auth::login))
        .route(
            "/chirps",
            get(handlers::chirp::list_chirps).post(handlers::chirp::create_chirp),
        )
        .route("/chirps/{chirp_id}", get(handlers::chirp::get_chirp))
}

/// Administrative routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route("/metrics", get(handlers::admin::metrics))
        .route("/reset", post(handlers::admin::reset))
}
