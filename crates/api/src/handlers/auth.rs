//! Handler for the `/auth` resource.
//!
//! The engines treat the email they receive as an already-identified
//! user; this endpoint is the only place credentials are checked, and
//! it keeps the original wire contract (`success` / `rol` / `email`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use keyhour_db::engines::UserEngine;
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/v1/auth/login
///
/// 400 when either field is empty, 401 on bad credentials, otherwise
/// `{ "success": true, "rol": ..., "email": ... }`.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if input.email.is_empty() || input.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Email and password are required",
            })),
        );
    }

    match UserEngine::authenticate(&state.store, &input.email, &input.password).await {
        Some(user) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "rol": user.role,
                "email": user.email,
            })),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "success": false,
                "message": "Invalid email or password",
            })),
        ),
    }
}
