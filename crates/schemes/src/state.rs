//! Application state with repository-based storage.
//!
//! The repository is injected as a trait object; handlers never know which
//! backend is behind it.

use std::sync::Arc;

use schemes_core::storage::SchemeRepository;

use crate::storage::InMemoryRepository;

/// Shared application state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub scheme_repo: Arc<dyn SchemeRepository>,
}

impl AppState {
    /// Creates state around an already constructed repository.
    pub fn new(scheme_repo: Arc<dyn SchemeRepository>) -> Self {
        Self { scheme_repo }
    }
}

impl Default for AppState {
    /// State backed by an empty in-memory repository.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
