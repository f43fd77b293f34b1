//! Core data types for the Tabula service.
//!
//! This module defines the domain data structures (records, datasets)
//! and the HTTP request/response bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of ingested CSV data: column name -> cell value.
///
/// All values are strings; no type coercion is performed on ingest,
/// so numeric and date-looking cells search and compare as text.
pub type Record = BTreeMap<String, String>;

/// The full ordered collection of records from one CSV upload.
///
/// Order matches row order in the source file.
pub type Dataset = Vec<Record>;

/// Response from a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// The full parsed dataset, echoed back to the caller
    pub data: Dataset,

    /// Human-readable confirmation message
    pub message: String,
}

/// Response from a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching records, in original dataset order
    pub data: Dataset,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
