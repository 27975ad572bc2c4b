//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{CreateUserRequest, UserResponse};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /api/users` - register a new user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.auth.register(&body.email, body.password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// `DELETE /api/users` - delete every user (dev only)
pub async fn delete_users(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.admin.delete_all_users().await?;

    Ok(StatusCode::NO_CONTENT)
}
