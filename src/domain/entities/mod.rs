//! # Domain Entities
//!
//! Core domain entities. Both map directly to their database tables.
//!
//! - **User**: account identified by a unique email, with an optional password hash
//! - **Chirp**: a short moderated message authored by a user
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! Together they form the storage contract the application layer is written
//! against. They are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod chirp;
mod user;

pub use chirp::{Chirp, ChirpQuery, ChirpRepository, SortOrder};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use chirp::MockChirpRepository;
#[cfg(test)]
pub use user::MockUserRepository;
