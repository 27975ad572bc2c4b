//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - User accounts in PostgreSQL
//! - **PgChirpRepository** - Chirps in PostgreSQL
//! - **InMemoryStore** - Both traits over process memory
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgChirpRepository, PgUserRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let users = Arc::new(PgUserRepository::new(pool.clone()));
//!     let chirps = Arc::new(PgChirpRepository::new(pool));
//! }
//! ```

pub mod chirp_repository;
pub mod memory_repository;
pub mod user_repository;

pub use chirp_repository::PgChirpRepository;
pub use memory_repository::InMemoryStore;
pub use user_repository::PgUserRepository;
