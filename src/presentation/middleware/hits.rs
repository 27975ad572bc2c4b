//! Hit Counting Middleware
//!
//! Counts every request that reaches the wrapped service.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::startup::AppState;

/// Increment the request counter, then continue to the next handler
pub async fn count_hits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.hits.increment();
    next.run(request).await
}
