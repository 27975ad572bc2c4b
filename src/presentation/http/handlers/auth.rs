//! Authentication Handlers

use axum::{extract::State, Json};

use crate::application::dto::{LoginRequest, UserResponse};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /api/login` - check credentials and return the user
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.auth.authenticate(&body.email, body.password).await?;

    Ok(Json(UserResponse::from(user)))
}
