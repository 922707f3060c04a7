//! Route definitions for the `/applications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST /               -> apply (student)
/// POST /{id}/accept    -> accept (manager)
/// POST /{id}/reject    -> reject (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(application::apply))
        .route("/{id}/accept", post(application::accept))
        .route("/{id}/reject", post(application::reject))
}
