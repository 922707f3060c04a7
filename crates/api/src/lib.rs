//! HTTP API for the KeyHour scholarship-hours platform.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
