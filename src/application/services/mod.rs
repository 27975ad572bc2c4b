//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration and password login
//! - **ChirpService**: Chirp moderation, creation and lookup
//! - **AdminService**: Hit counter readout and dev-only reset operations

pub mod admin_service;
pub mod auth_service;
pub mod chirp_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use chirp_service::ChirpService;
