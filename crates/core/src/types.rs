//! Shared scalar aliases.

/// Account ids come from a PostgreSQL `BIGSERIAL`.
pub type DbId = i64;

/// Account creation times, stored as `TIMESTAMPTZ` and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
