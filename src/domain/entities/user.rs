//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - email: TEXT NOT NULL UNIQUE
/// - password_hash: TEXT NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-generated identifier
    pub id: Uuid,

    /// Email address (unique, enforced by the store)
    pub email: String,

    /// Argon2 password hash; `None` for accounts created without a password
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh id and both timestamps set to now.
    pub fn new(email: impl Into<String>, password_hash: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account has a usable login credential.
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user.
    ///
    /// Fails with `AppError::Conflict` when the email is already registered.
    async fn create(&self, email: &str, password_hash: Option<String>) -> Result<User, AppError>;

    /// Find a user by their email address.
    ///
    /// Fails with `AppError::NotFound` when no user has this email.
    async fn find_by_email(&self, email: &str) -> Result<User, AppError>;

    /// Delete every user, cascading to their chirps. Returns the number removed.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
