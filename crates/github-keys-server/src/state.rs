//! Application state.

use std::sync::Arc;

use crate::cache::KeyCache;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The key cache.
    cache: Arc<KeyCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: Arc<KeyCache>) -> Self {
        Self { cache }
    }

    /// Returns a reference to the key cache.
    pub fn cache(&self) -> &KeyCache {
        self.cache.as_ref()
    }
}
