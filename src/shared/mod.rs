//! Shared Utilities Module

pub mod config;

pub use config::{ConfigError, HostConfig};
