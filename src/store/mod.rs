//! Store module - persisted remote-application state

pub mod remote;
pub mod repository;

// Public API re-exports
pub use remote::{RemoteApp, RemoteStore};
pub use repository::{JsonFileRepository, MemoryRepository, StateRepository, StoreError};
