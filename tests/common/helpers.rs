// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use tabula::core::config::Config;
use tabula::core::services::Services;
use tabula::http::build_router;

/// Multipart boundary used by all upload helpers
pub const BOUNDARY: &str = "tabula-test-boundary";

/// Create a test application with a fresh, empty store
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app() -> Router {
    let services = Arc::new(Services::new(Config::default()));
    build_router(services)
}

/// Build a multipart body containing one part
///
/// `content_type` of `None` omits the part's Content-Type header.
#[allow(dead_code)] // Used in integration tests
pub fn multipart_body(part_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{part_name}\"; filename=\"data.csv\"\r\n")
            .as_bytes(),
    );
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    body
}

/// Build a POST /api/files request uploading `bytes` as the given part
#[allow(dead_code)] // Used in integration tests
pub fn upload_request(part_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/files")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(part_name, content_type, bytes)))
        .unwrap()
}

/// Build a well-formed CSV upload request
#[allow(dead_code)] // Used in integration tests
pub fn csv_upload_request(csv: &str) -> Request<Body> {
    upload_request("files", Some("text/csv"), csv.as_bytes())
}

/// Build a GET request for the given URI
#[allow(dead_code)] // Used in integration tests
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read a response body as JSON
#[allow(dead_code)] // Used in integration tests
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
