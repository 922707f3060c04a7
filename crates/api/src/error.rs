use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use keyhour_core::error::CoreError;
use keyhour_db::{EngineError, StoreError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for
/// persistence failures. Implements [`IntoResponse`] to produce
/// consistent JSON error responses of the form
/// `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the engines.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure from the record store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Core(core) => AppError::Core(core),
            EngineError::Store(store) => AppError::Store(store),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::UserNotFound(email) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("User {email} not found"),
                ),
                CoreError::DuplicateApplication => (
                    StatusCode::CONFLICT,
                    "DUPLICATE_APPLICATION",
                    core.to_string(),
                ),
                CoreError::ProjectUnavailable => (
                    StatusCode::CONFLICT,
                    "PROJECT_UNAVAILABLE",
                    core.to_string(),
                ),
                CoreError::NoSeatsAvailable => {
                    (StatusCode::CONFLICT, "NO_SEATS_AVAILABLE", core.to_string())
                }
                CoreError::AlreadyDecided => {
                    (StatusCode::CONFLICT, "ALREADY_DECIDED", core.to_string())
                }
                CoreError::InvalidQuantity => {
                    (StatusCode::BAD_REQUEST, "INVALID_QUANTITY", core.to_string())
                }
                CoreError::NotEnrolled => {
                    (StatusCode::BAD_REQUEST, "NOT_ENROLLED", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Record store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
