//! Loader ports for the bootstrap's background enrichment
//!
//! The icon bundle and the full runtime module are best-effort,
//! non-critical resources. The fetch mechanism itself is an external
//! collaborator; these ports only define the seam, with `Null*`
//! implementations for tests and server deployments.

use thiserror::Error;

/// Fixed reference to the third-party icon-component bundle
pub const ICON_BUNDLE_URL: &str =
    "https://unpkg.com/ionicons@7.1.0/dist/ionicons/ionicons.esm.js";

/// Background load error
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Resource unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A fetched icon-component bundle
#[derive(Clone, Debug)]
pub struct IconBundle {
    /// Where the bundle came from
    pub url: String,
    /// Raw bundle contents
    pub bytes: Vec<u8>,
}

/// The full framework runtime module, shared so remote modules do not
/// bundle their own copy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeModule {
    /// Runtime version identifier
    pub version: String,
}

impl RuntimeModule {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Port for fetching auxiliary visual assets by reference
pub trait AssetLoader: Send + Sync {
    fn fetch(&self, url: &str) -> Result<IconBundle, LoadError>;
}

/// Port for loading the full runtime module
pub trait RuntimeLoader: Send + Sync {
    fn load(&self) -> Result<RuntimeModule, LoadError>;
}

/// A null asset loader for tests and server-side runs
pub struct NullAssetLoader;

impl AssetLoader for NullAssetLoader {
    fn fetch(&self, url: &str) -> Result<IconBundle, LoadError> {
        Ok(IconBundle {
            url: url.to_string(),
            bytes: Vec::new(),
        })
    }
}

/// A null runtime loader for tests and server-side runs
pub struct NullRuntimeLoader;

impl RuntimeLoader for NullRuntimeLoader {
    fn load(&self) -> Result<RuntimeModule, LoadError> {
        Ok(RuntimeModule::new(env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_loaders() {
        let bundle = NullAssetLoader.fetch(ICON_BUNDLE_URL).unwrap();
        assert_eq!(bundle.url, ICON_BUNDLE_URL);
        assert!(bundle.bytes.is_empty());

        let runtime = NullRuntimeLoader.load().unwrap();
        assert!(!runtime.version.is_empty());
    }
}
