//! CSV ingest: converting uploaded text into a dataset.
//!
//! The first row of the input is the header; every following row
//! becomes one [`Record`] keyed by the header's column names. All
//! cell values stay strings. Quoting and escaping follow the `csv`
//! crate's RFC 4180 handling.
//!
//! Ragged rows are tolerated: a row with fewer fields than the
//! header is padded with empty strings, and fields beyond the header
//! width are dropped.

use csv::ReaderBuilder;

use crate::core::error::Result;
use crate::core::types::{Dataset, Record};

/// Parse CSV text into a dataset.
///
/// Returns an empty dataset for empty input (header-only files yield
/// zero records). Any reader error surfaces as
/// [`TabulaError::CsvParse`](crate::core::error::TabulaError::CsvParse)
/// without partial output.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut dataset = Dataset::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()))
            .collect();
        dataset.push(record);
    }

    Ok(dataset)
}
