//! Application state

use std::sync::Arc;

use tick_core::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get reference to the store
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let store = Store::open_in_memory().await.unwrap();
    store.migrate().await.unwrap();
    AppState::new(store)
}
