//! Handlers for user listings (admin views).

use axum::extract::State;
use axum::Json;
use keyhour_db::engines::UserEngine;

use crate::state::AppState;

/// GET /api/v1/users/managers
pub async fn list_managers(State(state): State<AppState>) -> Json<serde_json::Value> {
    let managers = UserEngine::list_managers(&state.store).await;
    Json(serde_json::json!({ "data": managers }))
}

/// GET /api/v1/users/students
pub async fn list_students(State(state): State<AppState>) -> Json<serde_json::Value> {
    let students = UserEngine::list_students(&state.store).await;
    Json(serde_json::json!({ "data": students }))
}
