/// Domain records (games, authors, events, mechanics) carry numeric
/// backend-assigned primary keys.
pub type DbId = i64;

/// User accounts and invitations are identified by backend-issued UUIDs.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
