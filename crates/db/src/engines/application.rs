//! Application lifecycle engine.
//!
//! States: `Pending -> Accepted` or `Pending -> Rejected`, both
//! terminal. The duplicate check in [`ApplicationEngine::apply`] and
//! the seat check in [`ApplicationEngine::accept`] each run inside one
//! store transaction, so concurrent requests serialize on the write
//! lock and cannot both pass a check that only admits one of them.

use chrono::Utc;
use keyhour_core::error::CoreError;
use keyhour_core::types::DbId;

use super::notification::push_notification;
use super::project::with_seats;
use crate::models::{
    Application, ApplicationStatus, ApplicationView, NotificationKind, ProjectStatus,
    ProjectWithSeats,
};
use crate::store::{next_id, EngineResult, Store};

/// Provides application operations.
pub struct ApplicationEngine;

impl ApplicationEngine {
    /// Submit an application for a project.
    ///
    /// Fails with `DuplicateApplication` when any application already
    /// exists for the (project, student) pair, and with
    /// `ProjectUnavailable` when the project is missing or not Active.
    pub async fn apply(
        store: &Store,
        project_id: DbId,
        student_email: &str,
    ) -> EngineResult<Application> {
        store
            .update(|c| {
                let duplicate = c
                    .applications
                    .iter()
                    .any(|a| a.project_id == project_id && a.student_email == student_email);
                if duplicate {
                    return Err(CoreError::DuplicateApplication);
                }

                match c.find_project(project_id) {
                    Some(p) if p.status == ProjectStatus::Active => {}
                    _ => return Err(CoreError::ProjectUnavailable),
                }

                let application = Application {
                    id: next_id(c.applications.iter().map(|a| a.id)),
                    project_id,
                    student_email: student_email.to_string(),
                    status: ApplicationStatus::Pending,
                    submitted_at: Utc::now(),
                    rejection_reason: None,
                    responded_at: None,
                };
                c.applications.push(application.clone());
                Ok(application)
            })
            .await
    }

    /// Accept a pending application, consuming one seat.
    ///
    /// Fails with `AlreadyDecided` when the application is terminal
    /// and with `NoSeatsAvailable` when the project is full; in both
    /// cases the store is unchanged.
    pub async fn accept(store: &Store, application_id: DbId) -> EngineResult<()> {
        store
            .update(|c| {
                let index = c
                    .applications
                    .iter()
                    .position(|a| a.id == application_id)
                    .ok_or(CoreError::NotFound {
                        entity: "Application",
                        id: application_id,
                    })?;

                if c.applications[index].status != ApplicationStatus::Pending {
                    return Err(CoreError::AlreadyDecided);
                }

                let project_id = c.applications[index].project_id;
                let project = c
                    .find_project(project_id)
                    .ok_or(CoreError::NotFound {
                        entity: "Project",
                        id: project_id,
                    })?;
                if c.available_seats(project) == 0 {
                    return Err(CoreError::NoSeatsAvailable);
                }
                let project_name = project.name.clone();

                let application = &mut c.applications[index];
                application.status = ApplicationStatus::Accepted;
                application.responded_at = Some(Utc::now());
                let student = application.student_email.clone();

                push_notification(
                    c,
                    &student,
                    format!(
                        "Congratulations! You have been accepted into the project \"{project_name}\""
                    ),
                    NotificationKind::Success,
                );
                Ok(())
            })
            .await
    }

    /// Reject a pending application with a non-empty reason.
    pub async fn reject(store: &Store, application_id: DbId, reason: &str) -> EngineResult<()> {
        if reason.trim().is_empty() {
            return Err(CoreError::Validation("rejection reason must not be empty".into()).into());
        }

        store
            .update(|c| {
                let application = c
                    .applications
                    .iter_mut()
                    .find(|a| a.id == application_id)
                    .ok_or(CoreError::NotFound {
                        entity: "Application",
                        id: application_id,
                    })?;

                if application.status != ApplicationStatus::Pending {
                    return Err(CoreError::AlreadyDecided);
                }

                application.status = ApplicationStatus::Rejected;
                application.rejection_reason = Some(reason.to_string());
                application.responded_at = Some(Utc::now());
                let student = application.student_email.clone();
                let project_id = application.project_id;
                let project_name = c.project_name(project_id);

                push_notification(
                    c,
                    &student,
                    format!("Your application to \"{project_name}\" has been rejected"),
                    NotificationKind::Warning,
                );
                Ok(())
            })
            .await
    }

    /// Applications submitted against one project (manager review list).
    pub async fn list_for_project(store: &Store, project_id: DbId) -> Vec<Application> {
        store
            .read(|c| {
                c.applications
                    .iter()
                    .filter(|a| a.project_id == project_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    /// A student's applications, joined with project names.
    pub async fn list_for_student(store: &Store, email: &str) -> Vec<ApplicationView> {
        store
            .read(|c| {
                c.applications
                    .iter()
                    .filter(|a| a.student_email == email)
                    .map(|a| ApplicationView {
                        application: a.clone(),
                        project_name: c.project_name(a.project_id),
                    })
                    .collect()
            })
            .await
    }

    /// The projects a student has been accepted into; the set of
    /// projects they may log hours against.
    pub async fn accepted_projects(store: &Store, email: &str) -> Vec<ProjectWithSeats> {
        store
            .read(|c| {
                c.applications
                    .iter()
                    .filter(|a| {
                        a.student_email == email && a.status == ApplicationStatus::Accepted
                    })
                    .filter_map(|a| c.find_project(a.project_id))
                    .map(|p| with_seats(c, p))
                    .collect()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use keyhour_core::error::CoreError;

    use super::*;
    use crate::engines::{NotificationEngine, ProjectEngine};
    use crate::models::UpdateProject;
    use crate::seed::default_collections;
    use crate::store::EngineError;

    fn seeded_store() -> Store {
        Store::in_memory(default_collections())
    }

    const STUDENT_A: &str = "alumno1@key.edu.sv";
    const STUDENT_B: &str = "alumno2@key.edu.sv";

    #[tokio::test]
    async fn test_apply_creates_pending_application() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        assert_eq!(application.id, 1);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert!(application.responded_at.is_none());
    }

    #[tokio::test]
    async fn test_second_apply_for_same_pair_is_duplicate() {
        let store = seeded_store();
        ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        let err = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::DuplicateApplication));
    }

    #[tokio::test]
    async fn test_rejected_student_cannot_reapply() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        ApplicationEngine::reject(&store, application.id, "not a fit")
            .await
            .unwrap();

        let err = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::DuplicateApplication));
    }

    #[tokio::test]
    async fn test_apply_to_finished_project_is_unavailable() {
        let store = seeded_store();
        // Project 3 is seeded Finished.
        let err = ApplicationEngine::apply(&store, 3, STUDENT_A).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::ProjectUnavailable));
    }

    #[tokio::test]
    async fn test_apply_to_unknown_project_is_unavailable() {
        let store = seeded_store();
        let err = ApplicationEngine::apply(&store, 999, STUDENT_A).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::ProjectUnavailable));
    }

    #[tokio::test]
    async fn test_accept_consumes_a_seat_and_notifies() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        ApplicationEngine::accept(&store, application.id).await.unwrap();

        let project = ProjectEngine::get(&store, 1).await.unwrap();
        assert_eq!(project.accepted_count, 1);
        assert_eq!(project.available_seats, project.project.total_seats - 1);

        let notices = NotificationEngine::list_for_user(&store, STUDENT_A, true).await;
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NotificationKind::Success);
        assert!(notices[0].message.contains("Desarrollo App Móvil"));
    }

    #[tokio::test]
    async fn test_last_seat_admits_exactly_one_student() {
        let store = seeded_store();
        // Shrink project 1 to a single seat.
        ProjectEngine::update(
            &store,
            1,
            UpdateProject {
                total_seats: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let a = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        let b = ApplicationEngine::apply(&store, 1, STUDENT_B).await.unwrap();

        ApplicationEngine::accept(&store, a.id).await.unwrap();
        let err = ApplicationEngine::accept(&store, b.id).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::NoSeatsAvailable));

        // B stays pending and the seat count is unchanged.
        let applications = ApplicationEngine::list_for_project(&store, 1).await;
        let b_after = applications.iter().find(|x| x.id == b.id).unwrap();
        assert_eq!(b_after.status, ApplicationStatus::Pending);

        let project = ProjectEngine::get(&store, 1).await.unwrap();
        assert_eq!(project.available_seats, 0);
    }

    #[tokio::test]
    async fn test_accept_twice_is_already_decided() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        ApplicationEngine::accept(&store, application.id).await.unwrap();

        let err = ApplicationEngine::accept(&store, application.id).await.unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::AlreadyDecided));
    }

    #[tokio::test]
    async fn test_reject_stores_reason_and_notifies() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 2, STUDENT_A).await.unwrap();
        ApplicationEngine::reject(&store, application.id, "schedule conflict")
            .await
            .unwrap();

        let views = ApplicationEngine::list_for_student(&store, STUDENT_A).await;
        assert_eq!(views[0].application.status, ApplicationStatus::Rejected);
        assert_eq!(
            views[0].application.rejection_reason.as_deref(),
            Some("schedule conflict")
        );
        assert_eq!(views[0].project_name, "Investigación en IA");

        let notices = NotificationEngine::list_for_user(&store, STUDENT_A, false).await;
        assert_eq!(notices[0].kind, NotificationKind::Warning);
    }

    #[tokio::test]
    async fn test_reject_requires_a_reason() {
        let store = seeded_store();
        let application = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        let err = ApplicationEngine::reject(&store, application.id, "  ")
            .await
            .unwrap_err();
        assert_matches!(err, EngineError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_accepted_projects_lists_only_accepted() {
        let store = seeded_store();
        let a1 = ApplicationEngine::apply(&store, 1, STUDENT_A).await.unwrap();
        ApplicationEngine::apply(&store, 2, STUDENT_A).await.unwrap();
        ApplicationEngine::accept(&store, a1.id).await.unwrap();

        let accepted = ApplicationEngine::accepted_projects(&store, STUDENT_A).await;
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].project.id, 1);
    }
}
