//! Route definitions for the `/notifications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST /{id}/read -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/read", post(notification::mark_read))
}
