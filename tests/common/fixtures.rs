// Test fixtures for integration testing

/// Small dataset used by most tests
#[allow(dead_code)] // Used in integration tests
pub const PEOPLE_CSV: &str = "name,city\nAna,Lima\nLuis,Quito\n";

/// Replacement dataset for overwrite tests
#[allow(dead_code)] // Used in integration tests
pub const CITIES_CSV: &str = "country,capital\nPeru,Lima\nEcuador,Quito\nColombia,Bogota\n";

/// Dataset with quoted fields and a ragged row
#[allow(dead_code)] // Used in integration tests
pub const MESSY_CSV: &str = "id,note,tag\n1,\"hello, world\",x\n2,short\n";

/// Bytes that are not valid UTF-8
#[allow(dead_code)] // Used in integration tests
pub const NOT_UTF8: &[u8] = &[0xff, 0xfe, 0xfd];
