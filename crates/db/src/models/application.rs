//! Application (postulación) entity model.

use keyhour_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// Decision state of an application.
///
/// `Pending` is the only non-terminal state; `Accepted` and `Rejected`
/// are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A record from the `applications` collection: a student's request to
/// join a project.
///
/// At most one application ever exists per (project, student) pair,
/// regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: DbId,
    pub project_id: DbId,
    pub student_email: String,
    pub status: ApplicationStatus,
    pub submitted_at: Timestamp,
    pub rejection_reason: Option<String>,
    pub responded_at: Option<Timestamp>,
}

/// An application joined with its project's name for display.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub project_name: String,
}
