/// All record ids are sequential 64-bit integers (max existing id + 1).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
