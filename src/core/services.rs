//! Unified service container for Tabula
//!
//! Provides shared access to the dataset store and configuration.

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::store::DatasetStore;

/// Unified services container
///
/// Handlers receive this struct as Axum state; the store is injected
/// here rather than living in a module-level global so tests can run
/// against isolated instances.
#[derive(Clone)]
pub struct Services {
    /// Shared dataset store
    pub store: Arc<DatasetStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(DatasetStore::new()),
            config: Arc::new(config),
        }
    }
}
