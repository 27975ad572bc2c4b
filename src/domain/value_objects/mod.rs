//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **DeploymentMode**: `dev` or anything else; gates destructive admin operations
//! - **MissingHashPolicy**: login behaviour for accounts without a password hash

mod deployment_mode;
mod login_policy;

pub use deployment_mode::*;
pub use login_policy::*;
