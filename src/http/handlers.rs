//! HTTP request handlers for the Tabula API
//!
//! Implements handlers for the 3 endpoints: health, file upload,
//! and record search.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::TabulaError;
use crate::core::services::Services;
use crate::core::types::{HealthResponse, SearchResponse, UploadResponse};
use crate::core::{ingest, search};

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// File upload handler
///
/// Accepts a multipart form with a single file part named `files`,
/// parses it as CSV, and replaces the stored dataset wholesale.
/// The store is only touched after the whole body has been read and
/// parsed successfully, so a failed or cancelled upload never leaves
/// a partial dataset behind.
///
/// # Errors
///
/// - `MissingFile`: no part named `files` in the body
/// - `UnsupportedMediaType`: declared part type is not `text/csv`
/// - `InvalidUpload`: multipart body could not be read
/// - `InvalidEncoding` / `CsvParse`: bytes could not be converted
///   into records
pub async fn upload_handler(
    State(services): State<Arc<Services>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, TabulaError> {
    // Find the `files` part; other parts are ignored
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TabulaError::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| TabulaError::InvalidUpload(e.to_string()))?;

        file = Some((content_type, bytes));
        break;
    }

    let (content_type, bytes) = file.ok_or(TabulaError::MissingFile)?;

    // The declared type must be exactly text/csv, no parameters
    if content_type.as_deref() != Some("text/csv") {
        return Err(TabulaError::UnsupportedMediaType(
            content_type.unwrap_or_else(|| "no content type".to_string()),
        ));
    }

    let text = String::from_utf8(bytes.to_vec())?;
    tracing::debug!(bytes = text.len(), "decoded upload body");

    let dataset = ingest::parse_dataset(&text)?;
    tracing::info!(rows = dataset.len(), "dataset replaced");

    services.store.replace(dataset.clone());

    Ok(Json(UploadResponse {
        data: dataset,
        message: "upload succeeded".to_string(),
    }))
}

/// Record search handler
///
/// Filters the current dataset by the `q` query parameter. A record
/// matches when any field value contains `q`, case-insensitively.
/// Searching an empty store returns an empty list.
///
/// # Errors
///
/// - `MissingQuery`: `q` is absent or empty
/// - `RepeatedQuery`: `q` was supplied more than once
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, TabulaError> {
    let mut values = params
        .into_iter()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value);

    let query = values.next().ok_or(TabulaError::MissingQuery)?;
    if values.next().is_some() {
        return Err(TabulaError::RepeatedQuery);
    }
    if query.is_empty() {
        return Err(TabulaError::MissingQuery);
    }

    let snapshot = services.store.current();
    let data = search::filter(&snapshot, &query);

    Ok(Json(SearchResponse { data }))
}
