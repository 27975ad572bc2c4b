//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)
//! - The request counter

pub mod database;
pub mod metrics;
pub mod repositories;
