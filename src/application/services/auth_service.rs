//! Authentication Service
//!
//! Handles account registration and password login.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{CredentialHasher, MissingHashPolicy, User, UserRepository, VerifyError};
use crate::shared::error::AppError;

/// Registration and login over a user repository.
///
/// Hashing and verification are CPU-heavy and run on the blocking pool.
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    hasher: CredentialHasher,
    missing_hash_policy: MissingHashPolicy,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: CredentialHasher,
        missing_hash_policy: MissingHashPolicy,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            missing_hash_policy,
        }
    }

    /// Register a new user, hashing the password when one is given.
    pub async fn register(&self, email: &str, password: Option<String>) -> Result<User, AppError> {
        let password_hash = match password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let user = self.user_repo.create(email, password_hash).await?;
        info!(user_id = %user.id, has_password = user.has_password(), "User registered");

        Ok(user)
    }

    /// Authenticate user with credentials.
    ///
    /// A wrong password is `Unauthorized`; a failed lookup, including an
    /// unknown email, is an internal error. Accounts without a stored hash
    /// follow the configured [`MissingHashPolicy`].
    pub async fn authenticate(&self, email: &str, password: String) -> Result<User, AppError> {
        let user = match self.user_repo.find_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(msg)) => {
                return Err(AppError::Internal(format!("User lookup failed: {}", msg)));
            }
            Err(e) => return Err(e),
        };

        match user.password_hash.clone() {
            Some(hash) => self.verify_password(hash, password).await?,
            None if self.missing_hash_policy.allows_login() => {
                warn!(user_id = %user.id, "Login accepted for account without password hash");
            }
            None => {
                debug!(user_id = %user.id, "Login refused for account without password hash");
                return Err(VerifyError::Mismatch.into());
            }
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;

        Ok(hash)
    }

    async fn verify_password(&self, hash: String, password: String) -> Result<(), AppError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))??;

        Ok(())
    }
}
