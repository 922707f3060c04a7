//! Route definitions.
//!
//! One module per top-level resource; [`api_routes`] assembles the
//! `/api/v1` tree.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod health;
pub mod hours;
pub mod notifications;
pub mod projects;
pub mod students;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                              login (public)
///
/// /projects                                list, create
/// /projects/history                        finished + cancelled
/// /projects/{id}                           get, update
/// /projects/{id}/applications              manager review list
///
/// /applications                            apply
/// /applications/{id}/accept                accept (manager)
/// /applications/{id}/reject                reject (manager)
///
/// /hours                                   register
/// /hours/{id}/approve                      approve (manager)
/// /hours/{id}/reject                       reject (manager)
///
/// /students/{email}/applications           student's applications
/// /students/{email}/accepted-projects      projects hours may be logged on
/// /students/{email}/hours                  student's hour entries
/// /students/{email}/hours/summary          yearly summary
///
/// /managers/{email}/hours                  entries across owned projects
///
/// /users/managers                          manager listing (admin)
/// /users/students                          student listing (admin)
/// /users/{email}/notifications             notification feed
///
/// /notifications/{id}/read                 mark read
///
/// /admin/compliance/annual-check           batch compliance scan
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::router())
        .nest("/applications", applications::router())
        .nest("/hours", hours::router())
        .nest("/students", students::router())
        .nest("/users", users::router())
        .nest("/notifications", notifications::router())
        .nest("/admin", admin::router())
        .route(
            "/managers/{email}/hours",
            get(handlers::hours::list_for_manager),
        )
}
