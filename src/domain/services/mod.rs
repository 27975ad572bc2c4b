//! # Domain Services
//!
//! Stateless services implementing the core business rules that don't
//! naturally belong to a single entity.
//!
//! ## Services
//!
//! - **ContentFilter**: chirp length limit and denylist masking
//! - **CredentialHasher**: one-way password hashing and verification

mod content_filter;
mod credential_hasher;

pub use content_filter::*;
pub use credential_hasher::*;
