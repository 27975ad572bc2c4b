//! HTTP endpoint tests

mod admin_tests;
mod auth_tests;
mod chirp_tests;
mod user_tests;
