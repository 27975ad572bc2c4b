//! Health Check Handler
//!
//! `GET /admin/healthz` - liveness probe. Touches no dependency and always
//! answers `200 OK`.

/// Liveness probe body
pub const HEALTHY: &str = "OK";

/// Basic health check endpoint
pub async fn healthz() -> &'static str {
    HEALTHY
}
