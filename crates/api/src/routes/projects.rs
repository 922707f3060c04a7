//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /                   -> list_projects (with ?status= filter)
/// POST /                   -> create_project (admin)
/// GET  /history            -> project_history
/// GET  /{id}               -> get_project
/// PUT  /{id}               -> update_project (admin)
/// GET  /{id}/applications  -> list_project_applications (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list_projects).post(project::create_project),
        )
        .route("/history", get(project::project_history))
        .route(
            "/{id}",
            get(project::get_project).put(project::update_project),
        )
        .route("/{id}/applications", get(project::list_project_applications))
}
