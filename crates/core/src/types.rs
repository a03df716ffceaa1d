/// Server-assigned entity identifiers are opaque strings; the backend mints
/// them and the client never inspects their structure.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
