//! Handler for the annual compliance check (admin).

use axum::extract::State;
use axum::Json;
use keyhour_db::engines::ComplianceEngine;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/admin/compliance/annual-check
///
/// Scan every student and warn those short of their yearly target.
/// Re-running emits fresh notices; there is no dedup.
pub async fn run_annual_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let emitted = ComplianceEngine::run_annual_check(&state.store).await?;
    Ok(Json(serde_json::json!({
        "data": { "notifications_emitted": emitted }
    })))
}
