//! Project entity model and DTOs.

use chrono::NaiveDate;
use keyhour_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle state of a project.
///
/// Admins move a project out of `Active` via [`UpdateProject`]; there
/// are no transitions back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Finished,
    Cancelled,
}

/// A record from the `projects` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Hours the project grants in total.
    pub total_hours: u32,
    /// Seat capacity, consumed by accepted applications.
    pub total_seats: u32,
    pub manager_email: String,
    pub status: ProjectStatus,
    pub created_date: NaiveDate,
    pub location: String,
    pub requirements: String,
}

/// A project annotated with seat occupancy, computed fresh from the
/// applications collection on every read (no cached counters).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSeats {
    #[serde(flatten)]
    pub project: Project,
    pub accepted_count: u32,
    pub available_seats: u32,
}

/// DTO for creating a project (admin).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 1, message = "total_hours must be greater than zero"))]
    pub total_hours: u32,
    #[validate(range(min = 1, message = "total_seats must be greater than zero"))]
    pub total_seats: u32,
    #[validate(email(message = "manager_email must be a valid email"))]
    pub manager_email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub requirements: String,
}

/// DTO for a partial project update (admin). Absent fields are kept.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "total_hours must be greater than zero"))]
    pub total_hours: Option<u32>,
    #[validate(range(min = 1, message = "total_seats must be greater than zero"))]
    pub total_seats: Option<u32>,
    pub manager_email: Option<String>,
    pub status: Option<ProjectStatus>,
    pub location: Option<String>,
    pub requirements: Option<String>,
}
