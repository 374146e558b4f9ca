//! Application state shared across handlers

use std::sync::Arc;

use crate::store::Store;

/// Shared application state
///
/// Holds the store client constructed by the process entry point.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }
}
