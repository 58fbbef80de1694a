//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The repository is injected at startup so handlers can
//! run against DynamoDB or the in-memory store.

use std::sync::Arc;

use thingstore_core::storage::ThingRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler. The repository handle is
/// read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// Thing repository.
    pub thing_repo: Arc<dyn ThingRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(thing_repo: Arc<dyn ThingRepository>) -> Self {
        Self { thing_repo }
    }
}

impl Default for AppState {
    /// State backed by a fresh in-memory repository.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
