//! Admin Handlers
//!
//! Hit counter page and the dev-only reset.

use axum::{extract::State, http::StatusCode, response::Html};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Render the admin metrics page
pub fn render_metrics(hits: u64) -> String {
    format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>",
        hits
    )
}

/// `GET /admin/metrics`
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics(state.admin.hits()))
}

/// `POST /admin/reset` - delete all users and zero the counter (dev only)
pub async fn reset(State(state): State<AppState>) -> Result<(StatusCode, &'static str), AppError> {
    state.admin.reset().await?;
    Ok((StatusCode::OK, "Hits reset to 0"))
}
