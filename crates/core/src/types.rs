/// All database primary keys are CUID-style TEXT identifiers.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
