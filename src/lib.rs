//! # Chirpy Library
//!
//! A small multi-user message posting service:
//! - user accounts with Argon2 password login
//! - chirps: short messages, length-limited and moderated
//! - a hit counter on the static web client with a dev-only reset
//! - PostgreSQL storage, or an in-memory store when no database is configured
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, repository traits, content filter, password hasher
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, request counter
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chirpy/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits, domain services
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, repositories, request counter
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Error type and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
