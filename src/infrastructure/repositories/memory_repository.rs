//! In-Memory Repository Implementation
//!
//! A process-local store implementing both repository traits with the same
//! contract as PostgreSQL: unique emails, chirps must reference an existing
//! user, deleting users cascades to their chirps, and listings come back in
//! insertion order. Used when no database is configured and by the tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpQuery, ChirpRepository, SortOrder, User, UserRepository};
use crate::shared::error::AppError;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    chirps: Vec<Chirp>,
}

/// In-memory store shared by the user and chirp repositories.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, email: &str, password_hash: Option<String>) -> Result<User, AppError> {
        let mut tables = self.tables.write();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = User::new(email, password_hash);
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        self.tables
            .read()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut tables = self.tables.write();
        let removed = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ChirpRepository for InMemoryStore {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError> {
        let mut tables = self.tables.write();
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(AppError::BadRequest("Author does not exist".to_string()));
        }

        let chirp = Chirp::new(body, user_id);
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn find_all(&self, query: &ChirpQuery) -> Result<Vec<Chirp>, AppError> {
        let tables = self.tables.read();
        let matching = tables
            .chirps
            .iter()
            .filter(|c| query.author_id.map_or(true, |author| c.user_id == author))
            .cloned();

        Ok(match query.order {
            SortOrder::Asc => matching.collect(),
            SortOrder::Desc => matching.rev().collect(),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Chirp, AppError> {
        self.tables
            .read()
            .chirps
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))
    }
}
