//! Shared domain types for the KeyHour scholarship-hours platform.

pub mod error;
pub mod roles;
pub mod types;
