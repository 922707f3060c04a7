//! Handlers for the `/hours` resource and per-student summaries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use keyhour_core::types::DbId;
use keyhour_db::engines::HourEngine;
use keyhour_db::models::{HourDecision, RegisterHours};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/hours
///
/// Register a Pending hour entry. 400 for zero quantities and
/// unenrolled students.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterHours>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let entry = HourEngine::register(&state.store, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": entry })),
    ))
}

/// POST /api/v1/hours/{id}/approve
///
/// 409 when the entry has already been decided.
pub async fn approve(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    HourEngine::decide(&state.store, id, HourDecision::Approved).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/hours/{id}/reject
///
/// 409 when the entry has already been decided.
pub async fn reject(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    HourEngine::decide(&state.store, id, HourDecision::Rejected).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/students/{email}/hours
pub async fn list_for_student(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<serde_json::Value> {
    let entries = HourEngine::list_for_student(&state.store, &email).await;
    Json(serde_json::json!({ "data": entries }))
}

/// GET /api/v1/managers/{email}/hours
///
/// Hour entries across all projects the manager owns.
pub async fn list_for_manager(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<serde_json::Value> {
    let entries = HourEngine::list_for_manager(&state.store, &email).await;
    Json(serde_json::json!({ "data": entries }))
}

/// GET /api/v1/students/{email}/hours/summary
///
/// Yearly summary: required vs approved vs carried-over hours.
pub async fn summary(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let summary = HourEngine::summary_for_student(&state.store, &email).await?;
    Ok(Json(serde_json::json!({ "data": summary })))
}
