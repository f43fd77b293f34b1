// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{CITIES_CSV, MESSY_CSV, NOT_UTF8, PEOPLE_CSV};
#[allow(unused_imports)]
pub use helpers::{
    create_test_app, csv_upload_request, get_request, response_json, upload_request,
};
