//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use lifesaver_assist::ChatClient;
use lifesaver_core::Store;

use crate::error::ApiError;

/// State shared across request handlers.
///
/// The store connection is opened once at startup and dropped at
/// shutdown. Handlers take the lock only for the duration of a single
/// document operation, never across an await point.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    pub chat: ChatClient,
}

impl AppState {
    pub fn new(store: Store, chat: ChatClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            chat,
        }
    }

    /// Lock the store for one operation.
    pub fn store(&self) -> Result<MutexGuard<'_, Store>, ApiError> {
        self.store
            .lock()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))
    }
}
