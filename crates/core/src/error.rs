use crate::types::DbId;

/// Domain errors surfaced by the lifecycle engines.
///
/// All variants are per-request and recoverable; nothing here is fatal
/// to the process. The API layer maps each variant to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The student already has an application (any status) for the project.
    #[error("An application for this project already exists")]
    DuplicateApplication,

    /// The project is missing or not in the Active state.
    #[error("The project is not available for applications")]
    ProjectUnavailable,

    /// Accepting would exceed the project's seat capacity.
    #[error("No seats available on this project")]
    NoSeatsAvailable,

    /// The record already has a terminal decision.
    #[error("A decision has already been made for this record")]
    AlreadyDecided,

    /// Hour quantities must be strictly positive.
    #[error("Hour quantity must be greater than zero")]
    InvalidQuantity,

    /// The student has no accepted application for the project.
    #[error("The student is not enrolled in this project")]
    NotEnrolled,

    #[error("Validation failed: {0}")]
    Validation(String),
}
