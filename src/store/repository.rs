//! StateRepository - durable storage for the remote-app slot
//!
//! The store itself stays persistence-agnostic; a repository is injected
//! and only promises "last-written descriptor is restored on next load".

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

use crate::store::RemoteApp;

/// Persistence error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No writable data directory")]
    NoDataDir,
}

/// Repository interface for the persisted remote-app slot
pub trait StateRepository: Send + Sync {
    /// Restore the last-written descriptor, if any
    fn load(&self) -> Option<RemoteApp>;

    /// Persist a descriptor, replacing whatever was stored
    fn save(&self, app: &RemoteApp) -> Result<(), StoreError>;
}

/// JSON file-backed repository
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository at a specific file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a repository at the default location
    /// (`<data_dir>/hostshell/remote_app.json`)
    pub fn open_default() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(data_dir.join("hostshell").join("remote_app.json")))
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateRepository for JsonFileRepository {
    fn load(&self) -> Option<RemoteApp> {
        if !self.path.exists() {
            return None;
        }
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                crate::log!("Failed to open remote-app state at {:?}: {}", self.path, e);
                return None;
            }
        };
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(app) => Some(app),
            Err(e) => {
                crate::log!("Discarding unreadable remote-app state at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, app: &RemoteApp) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, app)?;
        Ok(())
    }
}

/// In-memory repository for tests and server-side runs
#[derive(Default)]
pub struct MemoryRepository {
    slot: Mutex<Option<RemoteApp>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateRepository for MemoryRepository {
    fn load(&self) -> Option<RemoteApp> {
        self.slot.lock().clone()
    }

    fn save(&self, app: &RemoteApp) -> Result<(), StoreError> {
        *self.slot.lock() = Some(app.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> RemoteApp {
        RemoteApp {
            name: "calc".to_string(),
            path: "/calc".to_string(),
            expose: "./Calc".to_string(),
            description: "Calculator module".to_string(),
        }
    }

    #[test]
    fn test_json_repository_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("remote_app.json");

        let repo = JsonFileRepository::new(path.clone());
        assert!(repo.load().is_none());

        repo.save(&descriptor()).unwrap();
        assert_eq!(repo.load(), Some(descriptor()));

        // A fresh repository over the same file sees the saved state
        let reopened = JsonFileRepository::new(path);
        assert_eq!(reopened.load(), Some(descriptor()));
    }

    #[test]
    fn test_json_repository_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remote_app.json");
        std::fs::write(&path, "not json").unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(repo.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_discarded() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remote_app.json");
        std::fs::write(&path, "not json").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(repo.load().is_none());
    }

    #[test]
    fn test_memory_repository_overwrite() {
        let repo = MemoryRepository::new();
        repo.save(&descriptor()).unwrap();

        let mut second = descriptor();
        second.name = "viewer".to_string();
        repo.save(&second).unwrap();

        assert_eq!(repo.load().unwrap().name, "viewer");
    }
}
