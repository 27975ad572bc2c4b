//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ChirpQuery, SortOrder};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional; an account without a password has no usable credential
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create chirp request
///
/// The body is checked by the content filter rather than here, since the
/// filter also rewrites it.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

/// Query string for listing chirps
#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl From<ListChirpsQuery> for ChirpQuery {
    fn from(query: ListChirpsQuery) -> Self {
        Self {
            author_id: query.author_id,
            order: query.sort,
        }
    }
}
