//! Record store, entity models, and lifecycle engines for KeyHour.
//!
//! The store holds five ordered collections (users, projects,
//! applications, hour entries, notifications) behind a single write
//! lock; every engine operation is one critical section against it.

pub mod engines;
pub mod models;
pub mod seed;
pub mod store;

pub use store::{EngineError, EngineResult, JsonBackend, MemoryBackend, Store, StoreError};
