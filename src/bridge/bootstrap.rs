//! Startup bootstrap - install the themed UI and share host handles
//!
//! Runs once per application instance. The themed UI is installed into
//! the render root in both execution contexts; handle publication and
//! the two background loads happen in client context only. Background
//! loads are fire-and-forget: nothing awaits them, their failures are
//! logged and dropped.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::bridge::loaders::{AssetLoader, NullAssetLoader, NullRuntimeLoader, RuntimeLoader};
use crate::bridge::{keys, Bridge, ExecutionContext, HostCapabilities, ICON_BUNDLE_URL};
use crate::theme::{ui_config, UiConfig};

/// Application handle supplied by the hosting framework at startup
///
/// Models the render root into which the UI library is installed.
pub struct App {
    name: String,
    ui: Option<Arc<UiConfig>>,
    installs: u32,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ui: None,
            installs: 0,
        }
    }

    /// Register the UI library into the render root
    pub fn install_ui(&mut self, ui: Arc<UiConfig>) {
        self.ui = Some(ui);
        self.installs += 1;
    }

    /// The installed UI configuration, if registration has happened
    pub fn ui(&self) -> Option<&UiConfig> {
        self.ui.as_deref()
    }

    /// How many times UI registration ran
    pub fn install_count(&self) -> u32 {
        self.installs
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The loader collaborators used by the background tasks
pub struct Loaders {
    pub assets: Arc<dyn AssetLoader>,
    pub runtime: Arc<dyn RuntimeLoader>,
}

impl Default for Loaders {
    fn default() -> Self {
        Self {
            assets: Arc::new(NullAssetLoader),
            runtime: Arc::new(NullRuntimeLoader),
        }
    }
}

/// Result of one bootstrap run
///
/// Dropping the handle detaches the background tasks; `join` waits for
/// them, which only tests and orderly shutdown need.
pub struct BootstrapHandle {
    /// Capability record for remote-module loaders; absent in server context
    pub capabilities: Option<HostCapabilities>,
    tasks: Vec<JoinHandle<()>>,
}

impl BootstrapHandle {
    /// Number of background tasks started
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the background loads to finish
    pub fn join(self) {
        for task in self.tasks {
            let _ = task.join();
        }
    }

    /// Explicitly leave the background tasks running
    pub fn detach(self) {}
}

/// Run the startup bootstrap once for an application instance
///
/// `theme_override` activates a different declared theme than the
/// built-in default; an undeclared name is logged and ignored.
///
/// Safe to invoke more than once: publications overwrite the same keys
/// with equivalent values, so repeat runs are wasteful, not unsafe.
pub fn bootstrap(
    app: &mut App,
    ctx: ExecutionContext,
    bridge: &Arc<Bridge>,
    loaders: &Loaders,
    theme_override: Option<&str>,
) -> BootstrapHandle {
    let mut ui = ui_config();
    if let Some(name) = theme_override {
        if ui.theme(name).is_some() {
            ui.default_theme = name.to_string();
        } else {
            crate::log!(
                "Theme {:?} is not declared, keeping default {:?}",
                name,
                ui.default_theme
            );
        }
    }
    let ui = Arc::new(ui);
    let mut tasks = Vec::new();
    let mut capabilities = None;

    if ctx.is_client() {
        // Best-effort icon enrichment; the result is not used by the host
        let assets = loaders.assets.clone();
        tasks.push(std::thread::spawn(move || {
            match assets.fetch(ICON_BUNDLE_URL) {
                Ok(bundle) => {
                    crate::log!("Icon bundle loaded from {} ({} bytes)", bundle.url, bundle.bytes.len())
                }
                Err(e) => crate::log!("Icon bundle fetch failed: {}", e),
            }
        }));

        // Share the full runtime so remote modules reuse one instance
        let runtime = loaders.runtime.clone();
        let runtime_bridge = bridge.clone();
        tasks.push(std::thread::spawn(move || match runtime.load() {
            Ok(module) => {
                crate::log!("Runtime module {} published", module.version);
                runtime_bridge.publish(keys::RUNTIME, module);
            }
            Err(e) => crate::log!("Runtime module load failed: {}", e),
        }));

        // Synchronous publications complete before bootstrap returns
        let caps = HostCapabilities::new(ui.clone());
        caps.publish_into(bridge);
        capabilities = Some(caps);
    }

    app.install_ui(ui);

    BootstrapHandle {
        capabilities,
        tasks,
    }
}
