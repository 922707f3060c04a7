//! Route definitions for admin-only operations.

use axum::routing::post;
use axum::Router;

use crate::handlers::compliance;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /compliance/annual-check -> run_annual_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/compliance/annual-check",
        post(compliance::run_annual_check),
    )
}
