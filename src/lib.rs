//! Hostshell library - themed UI bootstrap, capability bridge and the
//! persisted remote-app store
//!
//! The main binary is in main.rs; everything here is usable as a
//! library by embedding hosts.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod bridge;
pub mod shared;
pub mod store;
pub mod theme;

pub use bridge::{bootstrap, App, Bridge, ExecutionContext, HostCapabilities, Loaders};
pub use shared::HostConfig;
pub use store::{RemoteApp, RemoteStore};
pub use theme::{ui_config, UiConfig};
