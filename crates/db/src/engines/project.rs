//! Project engine: listing with derived seat counts, creation, and
//! admin edits.

use chrono::Utc;
use keyhour_core::error::CoreError;
use keyhour_core::types::DbId;
use validator::Validate;

use crate::models::{CreateProject, Project, ProjectStatus, ProjectWithSeats, UpdateProject};
use crate::store::{next_id, Collections, EngineResult, Store};

/// Provides project operations.
pub struct ProjectEngine;

/// Annotate a project with occupancy derived from the applications
/// collection. Never cached; drift is impossible.
pub(crate) fn with_seats(c: &Collections, project: &Project) -> ProjectWithSeats {
    let accepted_count = c.accepted_count(project.id);
    ProjectWithSeats {
        project: project.clone(),
        accepted_count,
        available_seats: project.total_seats.saturating_sub(accepted_count),
    }
}

impl ProjectEngine {
    /// List projects, optionally filtered by status, each annotated
    /// with `accepted_count` and `available_seats`.
    pub async fn list(
        store: &Store,
        status_filter: Option<ProjectStatus>,
    ) -> Vec<ProjectWithSeats> {
        store
            .read(|c| {
                c.projects
                    .iter()
                    .filter(|p| status_filter.map_or(true, |s| p.status == s))
                    .map(|p| with_seats(c, p))
                    .collect()
            })
            .await
    }

    /// Fetch one project with derived seats.
    pub async fn get(store: &Store, id: DbId) -> EngineResult<ProjectWithSeats> {
        store
            .read(|c| {
                c.find_project(id)
                    .map(|p| with_seats(c, p))
                    .ok_or(CoreError::NotFound {
                        entity: "Project",
                        id,
                    })
            })
            .await
            .map_err(Into::into)
    }

    /// Create a project (admin). New projects start Active with
    /// today's date.
    pub async fn create(store: &Store, input: CreateProject) -> EngineResult<Project> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        store
            .update(|c| {
                let project = Project {
                    id: next_id(c.projects.iter().map(|p| p.id)),
                    name: input.name.clone(),
                    description: input.description.clone(),
                    total_hours: input.total_hours,
                    total_seats: input.total_seats,
                    manager_email: input.manager_email.clone(),
                    status: ProjectStatus::Active,
                    created_date: Utc::now().date_naive(),
                    location: input.location.clone(),
                    requirements: input.requirements.clone(),
                };
                c.projects.push(project.clone());
                Ok(project)
            })
            .await
    }

    /// Partially update a project (admin). Status edits here are how a
    /// project moves Active -> Finished or Active -> Cancelled.
    pub async fn update(store: &Store, id: DbId, input: UpdateProject) -> EngineResult<Project> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        store
            .update(|c| {
                let project = c
                    .projects
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(CoreError::NotFound {
                        entity: "Project",
                        id,
                    })?;

                if let Some(name) = &input.name {
                    project.name = name.clone();
                }
                if let Some(description) = &input.description {
                    project.description = description.clone();
                }
                if let Some(total_hours) = input.total_hours {
                    project.total_hours = total_hours;
                }
                if let Some(total_seats) = input.total_seats {
                    project.total_seats = total_seats;
                }
                if let Some(manager_email) = &input.manager_email {
                    project.manager_email = manager_email.clone();
                }
                if let Some(status) = input.status {
                    project.status = status;
                }
                if let Some(location) = &input.location {
                    project.location = location.clone();
                }
                if let Some(requirements) = &input.requirements {
                    project.requirements = requirements.clone();
                }

                Ok(project.clone())
            })
            .await
    }

    /// Projects no longer active (finished or cancelled).
    pub async fn history(store: &Store) -> Vec<ProjectWithSeats> {
        store
            .read(|c| {
                c.projects
                    .iter()
                    .filter(|p| p.status != ProjectStatus::Active)
                    .map(|p| with_seats(c, p))
                    .collect()
            })
            .await
    }
}
