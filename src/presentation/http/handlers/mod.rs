//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Each one decodes its input with an
//! extractor, delegates to an application service and encodes the result;
//! every failure leaves through `AppError`.

pub mod admin;
pub mod auth;
pub mod chirp;
pub mod health;
pub mod user;
