//! HTTP Surface
//!
//! Routing table, handlers and request extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
