//! Request handlers, one module per resource.

pub mod application;
pub mod auth;
pub mod compliance;
pub mod hours;
pub mod notification;
pub mod project;
pub mod user;
