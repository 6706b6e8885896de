//! Bridge module - shared handles between the host and remote modules
//!
//! Independently loaded remote modules must reuse the host's framework
//! instances instead of bundling their own. The host publishes a fixed
//! set of handles into a `Bridge` registry during client-side startup;
//! remote loaders read them back by key, or receive the same handles as
//! an explicit `HostCapabilities` record.

pub mod bootstrap;
pub mod loaders;

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::{RemoteApp, RemoteStore, StateRepository};
use crate::theme::{ThemeDefinition, UiConfig};

// Public API re-exports
pub use bootstrap::{bootstrap, App, BootstrapHandle, Loaders};
pub use loaders::{
    AssetLoader, IconBundle, LoadError, NullAssetLoader, NullRuntimeLoader, RuntimeLoader,
    RuntimeModule, ICON_BUNDLE_URL,
};

/// Execution context of one startup run, decided once per invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Browser-like environment; handles are published, assets loaded
    Client,
    /// Server-side pre-rendering pass; publication is skipped entirely
    Server,
}

impl ExecutionContext {
    pub fn is_client(self) -> bool {
        matches!(self, ExecutionContext::Client)
    }
}

/// Fixed keys under which the host publishes its handles
pub mod keys {
    /// Full framework runtime module (set by a background load)
    pub const RUNTIME: &str = "runtime";
    /// Theme-configured UI root
    pub const UI: &str = "ui";
    /// Theme-access helper
    pub const THEME_ACCESSOR: &str = "use_theme";
    /// Store-definition helper
    pub const STORE_FACTORY: &str = "define_store";
    /// Store-to-refs helper
    pub const STORE_REFS: &str = "store_to_refs";

    /// Every key the host publishes in client context
    pub const ALL: [&str; 5] = [RUNTIME, UI, THEME_ACCESSOR, STORE_FACTORY, STORE_REFS];
}

/// Process-wide registry of shared handles
///
/// The host is the sole writer; writes happen during single-threaded
/// startup, before remote readers run. `publish` overwrites
/// unconditionally, so re-running startup is wasteful but safe.
#[derive(Default)]
pub struct Bridge {
    slots: RwLock<HashMap<&'static str, Arc<dyn Any + Send + Sync>>>,
}

impl Bridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a handle under a fixed key, replacing any previous value
    pub fn publish<T: Any + Send + Sync>(&self, key: &'static str, value: T) {
        self.publish_arc(key, Arc::new(value));
    }

    /// Publish an already-shared handle without re-wrapping it
    pub fn publish_arc<T: Any + Send + Sync>(&self, key: &'static str, value: Arc<T>) {
        self.slots.write().insert(key, value);
    }

    /// Read a handle back, typed
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let slot = self.slots.read().get(key)?.clone();
        slot.downcast::<T>().ok()
    }

    /// Whether a key has been published
    pub fn contains(&self, key: &str) -> bool {
        self.slots.read().contains_key(key)
    }

    /// Keys currently published
    pub fn published_keys(&self) -> Vec<&'static str> {
        self.slots.read().keys().copied().collect()
    }

    /// Number of published keys
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Whether nothing has been published
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

/// Theme-access helper shared with remote modules
#[derive(Clone)]
pub struct ThemeAccessor {
    ui: Arc<UiConfig>,
}

impl ThemeAccessor {
    pub fn new(ui: Arc<UiConfig>) -> Self {
        Self { ui }
    }

    /// The theme active at startup
    pub fn current(&self) -> Option<&ThemeDefinition> {
        self.ui.default_theme()
    }

    /// Resolve any declared theme by name
    pub fn theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.ui.theme(name)
    }

    /// The underlying UI configuration
    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }
}

/// Store-definition helper shared with remote modules
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreFactory;

impl StoreFactory {
    /// Open a remote-app store over the given repository
    pub fn open(&self, repository: Arc<dyn StateRepository>) -> RemoteStore {
        RemoteStore::open(repository)
    }
}

/// Store-to-refs helper shared with remote modules
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreRefs;

impl StoreRefs {
    /// Snapshot the store's current slot as a plain value
    pub fn snapshot(&self, store: &RemoteStore) -> Option<RemoteApp> {
        store.remote_app().cloned()
    }
}

/// Explicit capability record handed to remote-module loaders
///
/// Carries the same handles the bridge publishes, as a single value a
/// loader can be given directly instead of going through the registry.
#[derive(Clone)]
pub struct HostCapabilities {
    pub ui: Arc<UiConfig>,
    pub theme_accessor: ThemeAccessor,
    pub store_factory: StoreFactory,
    pub store_refs: StoreRefs,
}

impl HostCapabilities {
    pub fn new(ui: Arc<UiConfig>) -> Self {
        Self {
            theme_accessor: ThemeAccessor::new(ui.clone()),
            store_factory: StoreFactory,
            store_refs: StoreRefs,
            ui,
        }
    }

    /// Publish each capability into the bridge under its fixed key
    pub fn publish_into(&self, bridge: &Bridge) {
        bridge.publish_arc(keys::UI, self.ui.clone());
        bridge.publish(keys::THEME_ACCESSOR, self.theme_accessor.clone());
        bridge.publish(keys::STORE_FACTORY, self.store_factory);
        bridge.publish(keys::STORE_REFS, self.store_refs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ui_config;

    #[test]
    fn test_publish_and_get() {
        let bridge = Bridge::new();
        bridge.publish_arc(keys::UI, Arc::new(ui_config()));

        let ui: Arc<UiConfig> = bridge.get(keys::UI).unwrap();
        assert_eq!(ui.default_theme, "dark");
        assert!(bridge.get::<u32>(keys::UI).is_none());
    }

    #[test]
    fn test_publish_overwrites() {
        let bridge = Bridge::new();
        bridge.publish(keys::RUNTIME, RuntimeModule::new("1.0.0"));
        bridge.publish(keys::RUNTIME, RuntimeModule::new("2.0.0"));

        assert_eq!(bridge.len(), 1);
        let runtime: Arc<RuntimeModule> = bridge.get(keys::RUNTIME).unwrap();
        assert_eq!(runtime.version, "2.0.0");
    }

    #[test]
    fn test_capabilities_publish_four_sync_keys() {
        let bridge = Bridge::new();
        let caps = HostCapabilities::new(Arc::new(ui_config()));
        caps.publish_into(&bridge);

        assert_eq!(bridge.len(), 4);
        assert!(bridge.contains(keys::UI));
        assert!(bridge.contains(keys::THEME_ACCESSOR));
        assert!(bridge.contains(keys::STORE_FACTORY));
        assert!(bridge.contains(keys::STORE_REFS));
        assert!(!bridge.contains(keys::RUNTIME));
    }

    #[test]
    fn test_theme_accessor() {
        let caps = HostCapabilities::new(Arc::new(ui_config()));
        assert!(caps.theme_accessor.current().unwrap().dark);
        assert!(!caps.theme_accessor.theme("light").unwrap().dark);
        assert!(caps.theme_accessor.theme("sepia").is_none());
    }

    #[test]
    fn test_store_helpers() {
        use crate::store::{MemoryRepository, RemoteApp};

        let caps = HostCapabilities::new(Arc::new(ui_config()));
        let mut store = caps.store_factory.open(Arc::new(MemoryRepository::new()));
        assert!(caps.store_refs.snapshot(&store).is_none());

        let app = RemoteApp {
            name: "calc".to_string(),
            path: "/calc".to_string(),
            expose: "./Calc".to_string(),
            description: "Calculator module".to_string(),
        };
        store.set_remote_app(app.clone());
        assert_eq!(caps.store_refs.snapshot(&store), Some(app));
    }
}
