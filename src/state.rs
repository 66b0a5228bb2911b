//! Shared application state for all routes. The store is injected at startup.

use crate::store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
