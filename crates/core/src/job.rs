//! The generation job record and its append-only log.
//!
//! One job tracks two parallel sub-requests against the remote generation
//! API. The record is what `GET /api/jobs/{id}` returns verbatim, so the
//! serialized field names match what the browser client expects
//! (`requestId1`, `generatedImageUrl1`, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{JobId, Timestamp};

/// Severity/kind of a single log line shown to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Success,
    Error,
    Pending,
}

/// One append-only log line on a job. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            message: message.into(),
            kind,
        }
    }
}

/// Lifecycle status of a job.
///
/// `Queued` is the initial state; `InProgress` can persist across many
/// polls; the remaining three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Nsfw,
}

impl JobStatus {
    /// Once a job reaches a terminal status, no further mutation occurs.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed | JobStatus::Nsfw)
    }
}

/// One logical image-generation job spanning two remote sub-requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationJob {
    pub id: JobId,
    pub request_id1: String,
    pub request_id2: String,
    pub status: JobStatus,
    pub prompt1: String,
    pub prompt2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_image_url1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_image_url2: Option<String>,
    pub logs: Vec<LogEntry>,
    pub created_at: Timestamp,
}

impl GenerationJob {
    /// Create a freshly queued job for two accepted sub-requests.
    pub fn new(
        id: JobId,
        request_id1: String,
        request_id2: String,
        prompt1: String,
        prompt2: String,
        source_image: Option<String>,
        logs: Vec<LogEntry>,
    ) -> Self {
        Self {
            id,
            request_id1,
            request_id2,
            status: JobStatus::Queued,
            prompt1,
            prompt2,
            source_image,
            generated_image_url1: None,
            generated_image_url2: None,
            logs,
            created_at: chrono::Utc::now(),
        }
    }

    /// Append a log line. Entries are strictly ordered by append time and
    /// never removed.
    pub fn push_log(&mut self, message: impl Into<String>, kind: LogKind) {
        self.logs.push(LogEntry::new(message, kind));
    }
}
