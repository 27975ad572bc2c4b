//! # Domain Layer
//!
//! The domain layer contains the core business rules of Chirpy.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Chirp) and their repository traits
//! - **value_objects**: Immutable value types (DeploymentMode, MissingHashPolicy)
//! - **services**: Pure domain services (content filter, credential hasher)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Domain services are stateless and side-effect free

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
