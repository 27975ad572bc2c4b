//! Chirp Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::{ChirpResponse, CreateChirpRequest, ListChirpsQuery};
use crate::domain::ChirpQuery;
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /api/chirps` - moderate and store a chirp
pub async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), AppError> {
    let chirp = state.chirps.create_chirp(&body.body, body.user_id).await?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

/// `GET /api/chirps` - all chirps in creation order
pub async fn list_chirps(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListChirpsQuery>,
) -> Result<Json<Vec<ChirpResponse>>, AppError> {
    let chirps = state.chirps.list_chirps(&ChirpQuery::from(query)).await?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// `GET /api/chirps/{chirp_id}` - a malformed id is reported as not found
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, AppError> {
    let chirp_id: Uuid = chirp_id
        .parse()
        .map_err(|_| AppError::NotFound("Chirp not found".into()))?;

    let chirp = state.chirps.get_chirp(chirp_id).await?;

    Ok(Json(ChirpResponse::from(chirp)))
}
