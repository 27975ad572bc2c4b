//! Password hashing.
//!
//! Argon2id with a configurable work factor. Hashes are PHC strings, so the
//! parameters a hash was produced with travel with it and verification keeps
//! working after the configured work factor changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::shared::error::AppError;

/// Failures of the hashing primitive itself.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Invalid password hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// The single outcome of a failed verification.
///
/// Wrong passwords, malformed hashes and sentinel values are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("Incorrect email or password")]
    Mismatch,
}

impl From<HashError> for AppError {
    fn from(err: HashError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<VerifyError> for AppError {
    fn from(err: VerifyError) -> Self {
        AppError::Unauthorized(err.to_string())
    }
}

/// One-way password hasher.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Build a hasher with the given Argon2id cost parameters.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hashing(e.to_string()))
    }

    /// Verify a password against a stored hash.
    pub fn verify(&self, hash: &str, password: &str) -> Result<(), VerifyError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| VerifyError::Mismatch)?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| VerifyError::Mismatch)
    }
}
