//! Hour entry engine: registration, review, and yearly aggregation.

use chrono::{Datelike, Utc};
use keyhour_core::error::CoreError;
use keyhour_core::types::DbId;
use validator::Validate;

use super::notification::push_notification;
use crate::models::{
    ApplicationStatus, HourDecision, HourEntry, HourEntryView, HourStatus, HoursSummary,
    NotificationKind, RegisterHours,
};
use crate::store::{next_id, Collections, EngineResult, Store};

/// Provides hour entry operations.
pub struct HourEngine;

/// Compute the yearly summary against the given current year. The
/// required-hours target is the scholarship percentage, by product
/// decision (see DESIGN.md).
pub(crate) fn summary_in_year(
    c: &Collections,
    email: &str,
    current_year: i32,
) -> Result<HoursSummary, CoreError> {
    let student = c
        .find_user(email)
        .ok_or_else(|| CoreError::UserNotFound(email.to_string()))?;

    let approved = |entry: &&HourEntry| {
        entry.student_email == email && entry.status == HourStatus::Approved
    };

    let approved_hours_this_year: u32 = c
        .hours
        .iter()
        .filter(approved)
        .filter(|h| h.year == current_year)
        .map(|h| h.quantity)
        .sum();

    let carried_over_hours: u32 = c
        .hours
        .iter()
        .filter(approved)
        .filter(|h| h.year < current_year)
        .map(|h| h.quantity)
        .sum();

    let required_hours = student.scholarship_percent;

    Ok(HoursSummary {
        student_email: email.to_string(),
        scholarship_percent: student.scholarship_percent,
        required_hours,
        approved_hours_this_year,
        carried_over_hours,
        missing_hours: required_hours.saturating_sub(approved_hours_this_year),
    })
}

impl HourEngine {
    /// Register a block of worked hours as a Pending entry.
    ///
    /// Fails with `InvalidQuantity` for zero quantities and with
    /// `NotEnrolled` unless the student holds an accepted application
    /// for the project. `year` is fixed at submission time.
    pub async fn register(store: &Store, input: RegisterHours) -> EngineResult<HourEntry> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if input.quantity == 0 {
            return Err(CoreError::InvalidQuantity.into());
        }

        store
            .update(|c| {
                let enrolled = c.applications.iter().any(|a| {
                    a.student_email == input.student_email
                        && a.project_id == input.project_id
                        && a.status == ApplicationStatus::Accepted
                });
                if !enrolled {
                    return Err(CoreError::NotEnrolled);
                }

                let now = Utc::now();
                let entry = HourEntry {
                    id: next_id(c.hours.iter().map(|h| h.id)),
                    student_email: input.student_email.clone(),
                    project_id: input.project_id,
                    date: input.date,
                    description: input.description.clone(),
                    quantity: input.quantity,
                    status: HourStatus::Pending,
                    submitted_at: now,
                    year: now.year(),
                };
                c.hours.push(entry.clone());
                Ok(entry)
            })
            .await
    }

    /// Apply a manager's decision to a pending entry, notifying the
    /// student with the quantity involved.
    ///
    /// Fails with `AlreadyDecided` when the entry is no longer Pending.
    pub async fn decide(
        store: &Store,
        entry_id: DbId,
        decision: HourDecision,
    ) -> EngineResult<()> {
        store
            .update(|c| {
                let entry = c
                    .hours
                    .iter_mut()
                    .find(|h| h.id == entry_id)
                    .ok_or(CoreError::NotFound {
                        entity: "HourEntry",
                        id: entry_id,
                    })?;

                if entry.status != HourStatus::Pending {
                    return Err(CoreError::AlreadyDecided);
                }

                entry.status = decision.status();
                let student = entry.student_email.clone();
                let quantity = entry.quantity;

                let (message, kind) = match decision {
                    HourDecision::Approved => (
                        format!("{quantity} hours approved"),
                        NotificationKind::Success,
                    ),
                    HourDecision::Rejected => (
                        format!("{quantity} hours rejected"),
                        NotificationKind::Warning,
                    ),
                };
                push_notification(c, &student, message, kind);
                Ok(())
            })
            .await
    }

    /// A student's hour entries, joined with project names.
    pub async fn list_for_student(store: &Store, email: &str) -> Vec<HourEntryView> {
        store
            .read(|c| {
                c.hours
                    .iter()
                    .filter(|h| h.student_email == email)
                    .map(|h| HourEntryView {
                        entry: h.clone(),
                        project_name: c.project_name(h.project_id),
                    })
                    .collect()
            })
            .await
    }

    /// Hour entries across all projects the manager owns.
    pub async fn list_for_manager(store: &Store, manager_email: &str) -> Vec<HourEntryView> {
        store
            .read(|c| {
                let owned: Vec<DbId> = c
                    .projects
                    .iter()
                    .filter(|p| p.manager_email == manager_email)
                    .map(|p| p.id)
                    .collect();

                c.hours
                    .iter()
                    .filter(|h| owned.contains(&h.project_id))
                    .map(|h| HourEntryView {
                        entry: h.clone(),
                        project_name: c.project_name(h.project_id),
                    })
                    .collect()
            })
            .await
    }

    /// Yearly summary for a student against the current calendar year.
    pub async fn summary_for_student(store: &Store, email: &str) -> EngineResult<HoursSummary> {
        let year = Utc::now().year();
        store
            .read(|c| summary_in_year(c, email, year))
            .await
            .map_err(Into::into)
    }
}
