//! The record store: five named collections behind one write lock.
//!
//! Persistence is whole-collection replace. Every mutation runs inside
//! [`Store::update`], which holds the write lock across the
//! check-then-write sequence and only commits (in memory and on disk)
//! when the operation succeeds. That single critical section is what
//! makes duplicate-check-then-insert and seat-check-then-accept atomic
//! under concurrent requests.

use std::path::PathBuf;

use keyhour_core::error::CoreError;
use keyhour_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::{Application, HourEntry, Notification, Project, User};

/// Failures of the persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt collection file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error type returned by engine operations: either a domain error or
/// a persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for engine return values.
pub type EngineResult<T> = Result<T, EngineError>;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// The five record collections, each an ordered sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collections {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub applications: Vec<Application>,
    pub hours: Vec<HourEntry>,
    pub notifications: Vec<Notification>,
}

impl Collections {
    pub fn find_project(&self, id: DbId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Project name for denormalized views; placeholder when the
    /// project record is gone.
    pub fn project_name(&self, id: DbId) -> String {
        self.find_project(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown project".to_string())
    }

    /// Count of accepted applications referencing the project,
    /// computed fresh on every call.
    pub fn accepted_count(&self, project_id: DbId) -> u32 {
        self.applications
            .iter()
            .filter(|a| {
                a.project_id == project_id
                    && a.status == crate::models::ApplicationStatus::Accepted
            })
            .count() as u32
    }

    /// Seats still open on the project. Saturating: a consistent store
    /// never over-accepts, but the derivation itself cannot go negative.
    pub fn available_seats(&self, project: &Project) -> u32 {
        project
            .total_seats
            .saturating_sub(self.accepted_count(project.id))
    }
}

/// Next sequential id for a collection: max + 1, or 1 when empty.
pub fn next_id(ids: impl IntoIterator<Item = DbId>) -> DbId {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// Persistence strategy for the collections.
///
/// `load` returns `Ok(None)` when no data has ever been saved, which
/// is the signal to seed defaults.
pub trait StoreBackend: Send + Sync {
    fn load(&self) -> Result<Option<Collections>, StoreError>;
    fn save(&self, collections: &Collections) -> Result<(), StoreError>;
}

/// One JSON file per collection under a data directory; each save
/// rewrites the affected files wholesale (no partial writes).
pub struct JsonBackend {
    dir: PathBuf,
}

/// Collection file names, in load/save order.
const COLLECTION_FILES: [&str; 5] = [
    "users.json",
    "projects.json",
    "applications.json",
    "hours.json",
    "notifications.json",
];

impl JsonBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_file<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt { path, source })
    }

    fn write_file<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        let bytes = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, bytes).map_err(|source| StoreError::Io { path, source })
    }

    fn marker_exists(&self) -> bool {
        COLLECTION_FILES.iter().any(|f| self.dir.join(f).exists())
    }
}

impl StoreBackend for JsonBackend {
    fn load(&self) -> Result<Option<Collections>, StoreError> {
        if !self.marker_exists() {
            return Ok(None);
        }
        Ok(Some(Collections {
            users: self.read_file("users.json")?,
            projects: self.read_file("projects.json")?,
            applications: self.read_file("applications.json")?,
            hours: self.read_file("hours.json")?,
            notifications: self.read_file("notifications.json")?,
        }))
    }

    fn save(&self, collections: &Collections) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        self.write_file("users.json", &collections.users)?;
        self.write_file("projects.json", &collections.projects)?;
        self.write_file("applications.json", &collections.applications)?;
        self.write_file("hours.json", &collections.hours)?;
        self.write_file("notifications.json", &collections.notifications)
    }
}

/// Non-persisting backend for tests: loads nothing, saves nowhere.
#[derive(Default)]
pub struct MemoryBackend;

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Collections>, StoreError> {
        Ok(None)
    }

    fn save(&self, _collections: &Collections) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The shared record store.
pub struct Store {
    inner: RwLock<Collections>,
    backend: Box<dyn StoreBackend>,
}

impl Store {
    /// Open the store, loading whatever the backend has. A fresh
    /// backend yields empty collections; callers seed afterwards.
    pub fn open(backend: impl StoreBackend + 'static) -> Result<Self, StoreError> {
        let collections = backend.load()?.unwrap_or_default();
        Ok(Self {
            inner: RwLock::new(collections),
            backend: Box::new(backend),
        })
    }

    /// In-memory store for tests, optionally pre-populated.
    pub fn in_memory(collections: Collections) -> Self {
        Self {
            inner: RwLock::new(collections),
            backend: Box::new(MemoryBackend),
        }
    }

    /// True when no users exist, i.e. the backend had never been
    /// written. The seed set is applied exactly in this case.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }

    /// Run a read-only closure against the collections.
    pub async fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> R {
        f(&*self.inner.read().await)
    }

    /// Run a fallible mutation as one transaction: the closure works
    /// on a scratch copy under the write lock, and the result is
    /// committed to memory and the backend only if both the closure
    /// and the save succeed. On any failure the visible state is
    /// unchanged.
    pub async fn update<R>(
        &self,
        f: impl FnOnce(&mut Collections) -> Result<R, CoreError>,
    ) -> EngineResult<R> {
        let mut guard = self.inner.write().await;
        let mut working = guard.clone();
        let out = f(&mut working)?;
        self.backend.save(&working)?;
        *guard = working;
        Ok(out)
    }
}
