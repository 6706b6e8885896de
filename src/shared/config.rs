//! Host configuration (hostshell.toml)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host configuration loaded from hostshell.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Hostshell metadata section
    #[serde(default)]
    pub hostshell: HostMeta,

    /// UI section
    #[serde(default)]
    pub ui: UiSection,

    /// Persisted-state section
    #[serde(default)]
    pub state: StateSection,
}

/// Hostshell metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostMeta {
    /// Config version for compatibility
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for HostMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "0.1".to_string()
}

/// UI configuration overrides
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Theme to activate instead of the built-in default
    #[serde(default)]
    pub default_theme: Option<String>,
}

/// Persisted-state configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateSection {
    /// Remote-app state file; default location is used if not specified
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Log file; default location is used if not specified
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl HostConfig {
    /// Find hostshell.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("hostshell").join("hostshell.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("hostshell.toml"))),
            Some(PathBuf::from("hostshell.toml")),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: HostConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Host configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.hostshell.version, "0.1");
        assert!(config.ui.default_theme.is_none());
        assert!(config.state.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostshell.toml");
        std::fs::write(
            &path,
            r#"
[ui]
default_theme = "light"

[state]
path = "/tmp/remote_app.json"
"#,
        )
        .unwrap();

        let config = HostConfig::load_from_path(&path).unwrap();
        assert_eq!(config.ui.default_theme.as_deref(), Some("light"));
        assert_eq!(
            config.state.path,
            Some(PathBuf::from("/tmp/remote_app.json"))
        );
        // Missing sections fall back to defaults
        assert_eq!(config.hostshell.version, "0.1");
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostshell.toml");
        std::fs::write(&path, "[ui").unwrap();

        assert!(HostConfig::load_from_path(&path).is_err());
    }
}
