/// Identifier for a generation job.
pub type JobId = uuid::Uuid;

/// UTC timestamp used throughout the domain model.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
