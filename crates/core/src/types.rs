/// Employee identifiers are opaque strings assigned by the store.
pub type EmployeeId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
