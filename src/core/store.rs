//! Shared dataset store.
//!
//! Holds the most recently ingested dataset as an immutable snapshot
//! behind a read-write lock. Writers swap the snapshot pointer;
//! readers clone the `Arc`. A search running concurrently with an
//! upload observes either the old or the new complete dataset, never
//! a torn one. Last successful upload wins.

use std::sync::{Arc, RwLock};

use crate::core::types::Dataset;

/// Process-wide store for the current dataset.
///
/// Starts empty; each successful upload replaces the contents
/// wholesale. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct DatasetStore {
    inner: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored dataset with a new one.
    ///
    /// Total overwrite: no merge, no dedup, no append. The lock is
    /// held only for the pointer swap.
    pub fn replace(&self, dataset: Dataset) {
        let snapshot = Arc::new(dataset);
        let mut guard = self.inner.write().expect("dataset store lock poisoned");
        *guard = snapshot;
    }

    /// Get the current dataset snapshot.
    ///
    /// The returned `Arc` stays valid even if a replace happens
    /// afterwards; callers read a consistent view.
    pub fn current(&self) -> Arc<Dataset> {
        let guard = self.inner.read().expect("dataset store lock poisoned");
        Arc::clone(&guard)
    }
}
