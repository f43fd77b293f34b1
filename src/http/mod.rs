//! HTTP REST adapter
//!
//! Depends only on core/. Provides the upload, search, and health
//! endpoints via the Axum web framework, plus the router assembly
//! shared between `main` and the integration tests.

pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::build_router;
