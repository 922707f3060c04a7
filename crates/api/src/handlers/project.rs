//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use keyhour_core::types::DbId;
use keyhour_db::engines::{ApplicationEngine, ProjectEngine};
use keyhour_db::models::{CreateProject, ProjectStatus, UpdateProject};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    /// Optional status filter (`Active`, `Finished`, `Cancelled`).
    pub status: Option<ProjectStatus>,
}

/// GET /api/v1/projects
///
/// List projects with derived seat counts, optionally filtered by status.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> Json<serde_json::Value> {
    let projects = ProjectEngine::list(&state.store, params.status).await;
    Json(serde_json::json!({ "data": projects }))
}

/// GET /api/v1/projects/history
///
/// Projects no longer active (finished or cancelled).
pub async fn project_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    let projects = ProjectEngine::history(&state.store).await;
    Json(serde_json::json!({ "data": projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let project = ProjectEngine::get(&state.store, id).await?;
    Ok(Json(serde_json::json!({ "data": project })))
}

/// POST /api/v1/projects
///
/// Create a project (admin). Returns 201 with the created record.
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let project = ProjectEngine::create(&state.store, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": project })),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update (admin); status edits drive the Active -> Finished /
/// Cancelled transitions.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<serde_json::Value>> {
    let project = ProjectEngine::update(&state.store, id, input).await?;
    Ok(Json(serde_json::json!({ "data": project })))
}

/// GET /api/v1/projects/{id}/applications
///
/// Applications submitted to one project (manager review list).
pub async fn list_project_applications(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    // Surface 404 for unknown projects rather than an empty list.
    ProjectEngine::get(&state.store, id).await?;
    let applications = ApplicationEngine::list_for_project(&state.store, id).await;
    Ok(Json(serde_json::json!({ "data": applications })))
}
