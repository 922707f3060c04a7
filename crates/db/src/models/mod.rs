//! Entity models and DTOs.
//!
//! One file per entity, each carrying the persisted struct, its status
//! enum where it has one, and the create/update DTOs and denormalized
//! views the API layer serves.

pub mod application;
pub mod hour_entry;
pub mod notification;
pub mod project;
pub mod user;

pub use application::{Application, ApplicationStatus, ApplicationView};
pub use hour_entry::{HourDecision, HourEntry, HourEntryView, HourStatus, HoursSummary, RegisterHours};
pub use notification::{Notification, NotificationKind};
pub use project::{CreateProject, Project, ProjectStatus, ProjectWithSeats, UpdateProject};
pub use user::{User, UserInfo};
