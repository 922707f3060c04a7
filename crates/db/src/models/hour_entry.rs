//! Hour entry entity model and DTOs.

use chrono::NaiveDate;
use keyhour_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review state of an hour entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourStatus {
    Pending,
    Approved,
    Rejected,
}

/// A record from the `hours` collection: a student-submitted block of
/// worked hours awaiting manager review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourEntry {
    pub id: DbId,
    pub student_email: String,
    pub project_id: DbId,
    /// Day the hours were worked, as reported by the student.
    pub date: NaiveDate,
    pub description: String,
    pub quantity: u32,
    pub status: HourStatus,
    pub submitted_at: Timestamp,
    /// Calendar year at submission time; the unit of yearly aggregation.
    pub year: i32,
}

/// A manager's decision on a pending hour entry.
///
/// Separate from [`HourStatus`] so review operations cannot move an
/// entry back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourDecision {
    Approved,
    Rejected,
}

impl HourDecision {
    pub fn status(self) -> HourStatus {
        match self {
            HourDecision::Approved => HourStatus::Approved,
            HourDecision::Rejected => HourStatus::Rejected,
        }
    }
}

/// An hour entry joined with its project's name for display.
#[derive(Debug, Clone, Serialize)]
pub struct HourEntryView {
    #[serde(flatten)]
    pub entry: HourEntry,
    pub project_name: String,
}

/// DTO for registering hours (student).
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterHours {
    #[validate(email(message = "student_email must be a valid email"))]
    pub student_email: String,
    pub project_id: DbId,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
}

/// Per-student yearly hours summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursSummary {
    pub student_email: String,
    pub scholarship_percent: u32,
    /// Annual target; equal to the scholarship percentage.
    pub required_hours: u32,
    pub approved_hours_this_year: u32,
    /// Approved hours from earlier years.
    pub carried_over_hours: u32,
    pub missing_hours: u32,
}
