//! Hostshell binary - boots the host shell in client context

use std::sync::Arc;

use hostshell::store::{JsonFileRepository, MemoryRepository, StateRepository};
use hostshell::{bootstrap, log, App, Bridge, ExecutionContext, HostConfig, Loaders, RemoteStore};

fn main() {
    let config = HostConfig::load();

    match &config.state.log_path {
        Some(path) => log::init_at(path),
        None => log::init(),
    }

    let bridge = Arc::new(Bridge::new());
    let mut app = App::new("hostshell");
    let handle = bootstrap(
        &mut app,
        ExecutionContext::Client,
        &bridge,
        &Loaders::default(),
        config.ui.default_theme.as_deref(),
    );

    if let Some(ui) = app.ui() {
        hostshell::log!("Active theme: {}", ui.default_theme);
    }

    let repository: Arc<dyn StateRepository> = match &config.state.path {
        Some(path) => Arc::new(JsonFileRepository::new(path.clone())),
        None => match JsonFileRepository::open_default() {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                hostshell::log!("Falling back to in-memory state: {}", e);
                Arc::new(MemoryRepository::new())
            }
        },
    };

    let store = RemoteStore::open(repository);
    match store.remote_app() {
        Some(remote) => hostshell::log!("Restored remote app {:?} at {}", remote.name, remote.path),
        None => hostshell::log!("No remote app persisted"),
    }

    handle.join();
    hostshell::log!("Startup complete, published keys: {:?}", bridge.published_keys());
}
