//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use keyhour_core::error::CoreError;
use keyhour_core::types::DbId;
use keyhour_db::engines::NotificationEngine;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /users/{email}/notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
}

/// GET /api/v1/users/{email}/notifications
///
/// List a user's notifications, most recent first.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(params): Query<NotificationQuery>,
) -> Json<serde_json::Value> {
    let unread_only = params.unread_only.unwrap_or(false);
    let notifications = NotificationEngine::list_for_user(&state.store, &email, unread_only).await;
    Json(serde_json::json!({ "data": notifications }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a notification as read. Returns 204 No Content on success
/// (including repeat calls), or 404 for an unknown id.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationEngine::mark_read(&state.store, id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
