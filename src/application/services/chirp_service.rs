//! Chirp Service
//!
//! Moderates and stores chirps, and serves them back.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpQuery, ChirpRepository, ContentFilter};
use crate::shared::error::AppError;

pub struct ChirpService {
    chirp_repo: Arc<dyn ChirpRepository>,
}

impl ChirpService {
    pub fn new(chirp_repo: Arc<dyn ChirpRepository>) -> Self {
        Self { chirp_repo }
    }

    /// Validate and mask `body`, then store it for `user_id`.
    ///
    /// Nothing is written when the body is rejected.
    pub async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError> {
        let cleaned = ContentFilter::validate(body)?;

        let chirp = self.chirp_repo.create(&cleaned, user_id).await?;
        info!(chirp_id = %chirp.id, user_id = %user_id, "Chirp created");

        Ok(chirp)
    }

    pub async fn list_chirps(&self, query: &ChirpQuery) -> Result<Vec<Chirp>, AppError> {
        self.chirp_repo.find_all(query).await
    }

    pub async fn get_chirp(&self, id: Uuid) -> Result<Chirp, AppError> {
        self.chirp_repo.find_by_id(id).await
    }
}
