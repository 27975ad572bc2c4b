//! Chirp entity and repository trait.
//!
//! Maps to the `chirps` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A short message authored by a user.
///
/// Maps to the `chirps` table:
/// - id: UUID PRIMARY KEY
/// - seq: BIGSERIAL (insertion order, not exposed)
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - body: TEXT NOT NULL
/// - user_id: UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,

    /// Moderated body, at most 140 characters
    pub body: String,

    /// Author
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    pub fn new(body: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            body: body.into(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation-time ordering for chirp listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filter and ordering for [`ChirpRepository::find_all`].
///
/// The default lists every chirp oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChirpQuery {
    pub author_id: Option<Uuid>,
    pub order: SortOrder,
}

/// Repository trait for Chirp data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Persist a chirp for `user_id`.
    ///
    /// The author is not checked beforehand; a dangling `user_id` is reported
    /// by the store as `AppError::BadRequest`.
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError>;

    /// All chirps matching the query, fully materialized.
    async fn find_all(&self, query: &ChirpQuery) -> Result<Vec<Chirp>, AppError>;

    /// Find a chirp by id. Fails with `AppError::NotFound` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Chirp, AppError>;
}
