//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateChirpRequest, CreateUserRequest, ListChirpsQuery, LoginRequest};
pub use response::{ChirpResponse, UserResponse};
