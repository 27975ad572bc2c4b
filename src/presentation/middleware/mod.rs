//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod hits;
pub mod logging;

pub use hits::count_hits;
