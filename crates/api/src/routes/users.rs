//! Route definitions for user listings and per-user notification feeds.

use axum::routing::get;
use axum::Router;

use crate::handlers::{notification, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /managers                -> manager listing (admin)
/// GET /students                -> student listing (admin)
/// GET /{email}/notifications   -> notification feed (?unread_only=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/managers", get(user::list_managers))
        .route("/students", get(user::list_students))
        .route("/{email}/notifications", get(notification::list_for_user))
}
