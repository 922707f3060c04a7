//! Route definitions for the `/hours` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::hours;
use crate::state::AppState;

/// Routes mounted at `/hours`.
///
/// ```text
/// POST /               -> register (student)
/// POST /{id}/approve   -> approve (manager)
/// POST /{id}/reject    -> reject (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(hours::register))
        .route("/{id}/approve", post(hours::approve))
        .route("/{id}/reject", post(hours::reject))
}
