//! Annual compliance check.

use chrono::{Datelike, Utc};
use keyhour_core::roles::Role;

use super::hours::summary_in_year;
use super::notification::push_notification;
use crate::models::NotificationKind;
use crate::store::{EngineResult, Store};

/// Batch scan over all students for unmet yearly hour requirements.
pub struct ComplianceEngine;

impl ComplianceEngine {
    /// Warn every student whose approved hours fall short of the
    /// yearly target. One bounded scan in one transaction; repeated
    /// invocations emit repeated notices (documented behavior, no
    /// dedup). Returns the number of notifications emitted.
    pub async fn run_annual_check(store: &Store) -> EngineResult<u32> {
        let year = Utc::now().year();
        Self::run_for_year(store, year).await
    }

    pub(crate) async fn run_for_year(store: &Store, year: i32) -> EngineResult<u32> {
        store
            .update(|c| {
                let students: Vec<String> = c
                    .users
                    .iter()
                    .filter(|u| u.role == Role::Student)
                    .map(|u| u.email.clone())
                    .collect();

                let mut emitted = 0;
                for email in students {
                    let summary = summary_in_year(c, &email, year)?;
                    if summary.missing_hours > 0 {
                        push_notification(
                            c,
                            &email,
                            format!(
                                "You have not met the required hours. You are {} hours short for {year}.",
                                summary.missing_hours
                            ),
                            NotificationKind::Warning,
                        );
                        emitted += 1;
                    }
                }

                tracing::info!(year, emitted, "annual compliance check complete");
                Ok(emitted)
            })
            .await
    }
}
