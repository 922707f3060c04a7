//! Route definitions for student-scoped read views.

use axum::routing::get;
use axum::Router;

use crate::handlers::{application, hours};
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET /{email}/applications        -> applications with project names
/// GET /{email}/accepted-projects   -> projects hours may be logged on
/// GET /{email}/hours               -> hour entries with project names
/// GET /{email}/hours/summary       -> yearly summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{email}/applications", get(application::list_for_student))
        .route(
            "/{email}/accepted-projects",
            get(application::accepted_projects),
        )
        .route("/{email}/hours", get(hours::list_for_student))
        .route("/{email}/hours/summary", get(hours::summary))
}
