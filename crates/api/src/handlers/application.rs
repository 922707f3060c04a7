//! Handlers for the `/applications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use keyhour_core::types::DbId;
use keyhour_db::engines::ApplicationEngine;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /applications`.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub project_id: DbId,
    pub student_email: String,
}

/// Request body for `POST /applications/{id}/reject`.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// POST /api/v1/applications
///
/// Submit an application. 409 on duplicates and unavailable projects.
pub async fn apply(
    State(state): State<AppState>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let application =
        ApplicationEngine::apply(&state.store, input.project_id, &input.student_email).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": application })),
    ))
}

/// POST /api/v1/applications/{id}/accept
///
/// Accept a pending application, consuming one seat. 409 when the
/// project is full or the application is already decided.
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ApplicationEngine::accept(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/applications/{id}/reject
///
/// Reject a pending application with a reason.
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<StatusCode> {
    ApplicationEngine::reject(&state.store, id, &input.reason).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/students/{email}/applications
pub async fn list_for_student(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<serde_json::Value> {
    let applications = ApplicationEngine::list_for_student(&state.store, &email).await;
    Json(serde_json::json!({ "data": applications }))
}

/// GET /api/v1/students/{email}/accepted-projects
///
/// The projects the student may log hours against.
pub async fn accepted_projects(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<serde_json::Value> {
    let projects = ApplicationEngine::accepted_projects(&state.store, &email).await;
    Json(serde_json::json!({ "data": projects }))
}
