//! Tabula - CSV upload and in-memory substring search service
//!
//! A small HTTP service that accepts an uploaded CSV file, converts
//! it to an in-memory collection of records, and exposes a
//! case-insensitive substring search over that collection. There is
//! no durable storage; each upload replaces the previous dataset
//! wholesale.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - ingest (CSV text to records)
//!   - search (substring filtering)
//!   - store (shared dataset snapshot)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, router
//!
//! # Key Properties
//!
//! - Upload replaces the dataset atomically; a failed parse never
//!   leaves partial data behind
//! - Search returns matches in original row order, uncapped
//! - Concurrent searches observe complete snapshots (old or new,
//!   never torn)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, TabulaError};
pub use crate::core::services::Services;
pub use crate::core::store::DatasetStore;
pub use crate::core::types::*;
