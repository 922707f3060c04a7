//! Lifecycle engines.
//!
//! Stateless structs with async associated functions taking the shared
//! [`crate::Store`]. Each operation is a single store transaction;
//! domain errors come back as [`keyhour_core::error::CoreError`]
//! wrapped in [`crate::store::EngineError`].

pub mod application;
pub mod compliance;
pub mod hours;
pub mod notification;
pub mod project;
pub mod user;

pub use application::ApplicationEngine;
pub use compliance::ComplianceEngine;
pub use hours::HourEngine;
pub use notification::NotificationEngine;
pub use project::ProjectEngine;
pub use user::UserEngine;
