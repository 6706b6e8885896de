//! RemoteStore - the single active remote-application slot
//!
//! Holds metadata about the currently embedded remote application and
//! keeps it durable across sessions through an injected repository.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{StateRepository, StoreError};

/// Metadata for one remotely-loaded application module
///
/// No field is validated; empty strings are accepted and persisted as-is.
/// Downstream consumers validate defensively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteApp {
    /// Remote application name
    pub name: String,
    /// Mount path inside the host
    pub path: String,
    /// Module exposed by the remote bundle
    pub expose: String,
    /// Human-readable description
    pub description: String,
}

/// Single-slot store for the active remote application
///
/// At most one descriptor is active at a time; there is no history.
/// Every mutation is saved through the repository, and the last-written
/// descriptor is restored when the store is opened.
pub struct RemoteStore {
    remote_app: Option<RemoteApp>,
    repository: Arc<dyn StateRepository>,
}

impl RemoteStore {
    /// Open the store, restoring persisted state if present
    pub fn open(repository: Arc<dyn StateRepository>) -> Self {
        let remote_app = repository.load();
        Self {
            remote_app,
            repository,
        }
    }

    /// Replace the active descriptor unconditionally
    ///
    /// Persistence is best-effort: a failed save is logged and the
    /// in-memory slot still holds the new descriptor.
    pub fn set_remote_app(&mut self, app: RemoteApp) {
        if let Err(e) = self.repository.save(&app) {
            crate::log!("Failed to persist remote app {:?}: {}", app.name, e);
        }
        self.remote_app = Some(app);
    }

    /// Read the active descriptor
    pub fn remote_app(&self) -> Option<&RemoteApp> {
        self.remote_app.as_ref()
    }

    /// Persist the current slot explicitly, surfacing the error
    pub fn flush(&self) -> Result<(), StoreError> {
        if let Some(app) = &self.remote_app {
            self.repository.save(app)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRepository;

    fn calc() -> RemoteApp {
        RemoteApp {
            name: "calc".to_string(),
            path: "/calc".to_string(),
            expose: "./Calc".to_string(),
            description: "Calculator module".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let store = RemoteStore::open(Arc::new(MemoryRepository::new()));
        assert!(store.remote_app().is_none());
    }

    #[test]
    fn test_set_then_read_is_identity() {
        let mut store = RemoteStore::open(Arc::new(MemoryRepository::new()));
        store.set_remote_app(calc());
        assert_eq!(store.remote_app(), Some(&calc()));
    }

    #[test]
    fn test_reload_restores_last_written() {
        let repo = Arc::new(MemoryRepository::new());

        let mut store = RemoteStore::open(repo.clone());
        store.set_remote_app(calc());
        drop(store);

        // Simulated page reload: a fresh store over the same repository
        let reloaded = RemoteStore::open(repo);
        assert_eq!(reloaded.remote_app(), Some(&calc()));
    }

    #[test]
    fn test_replacement_keeps_single_slot() {
        let mut store = RemoteStore::open(Arc::new(MemoryRepository::new()));
        store.set_remote_app(calc());

        let mut next = calc();
        next.name = "viewer".to_string();
        next.path = "/viewer".to_string();
        store.set_remote_app(next.clone());

        assert_eq!(store.remote_app(), Some(&next));
    }

    #[test]
    fn test_empty_fields_accepted() {
        let mut store = RemoteStore::open(Arc::new(MemoryRepository::new()));
        store.set_remote_app(RemoteApp::default());
        assert_eq!(store.remote_app(), Some(&RemoteApp::default()));
    }
}
