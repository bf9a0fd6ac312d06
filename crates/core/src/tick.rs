//! Per-tick transition logic for the poll loop.
//!
//! Each poll tick observes the status of both remote sub-requests and maps
//! the pair to a single outcome. Keeping this as a pure function lets the
//! precedence rules be tested without a running loop.

use crate::job::JobStatus;

/// Status of one remote sub-request as reported by the generation API.
///
/// The remote service reports free-form strings; anything unrecognized maps
/// to `Unknown` and never triggers a transition on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Nsfw,
    Unknown,
}

impl RequestStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "queued" => RequestStatus::Queued,
            "in_progress" => RequestStatus::InProgress,
            "completed" => RequestStatus::Completed,
            "failed" => RequestStatus::Failed,
            "nsfw" => RequestStatus::Nsfw,
            _ => RequestStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Queued => "queued",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Failed => "failed",
            RequestStatus::Nsfw => "nsfw",
            RequestStatus::Unknown => "unknown",
        }
    }
}

/// Outcome of evaluating one poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Both sub-requests completed; the job is done.
    Completed,
    /// At least one sub-request failed.
    Failed,
    /// At least one sub-request was flagged as inappropriate.
    Nsfw,
    /// At least one sub-request is still being worked on.
    InProgress,
    /// Nothing observed warrants a status change; keep polling.
    NoChange,
}

impl TickOutcome {
    /// The job status this outcome transitions to, if any.
    pub fn job_status(self) -> Option<JobStatus> {
        match self {
            TickOutcome::Completed => Some(JobStatus::Completed),
            TickOutcome::Failed => Some(JobStatus::Failed),
            TickOutcome::Nsfw => Some(JobStatus::Nsfw),
            TickOutcome::InProgress => Some(JobStatus::InProgress),
            TickOutcome::NoChange => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TickOutcome::Completed | TickOutcome::Failed | TickOutcome::Nsfw)
    }
}

/// Map the observed pair of sub-request statuses to a tick outcome.
///
/// Precedence, checked in order: both completed, either failed, either
/// nsfw, either in progress, otherwise no change. `failed` therefore wins
/// over `nsfw` and `in_progress` even when the other sub-request completed.
pub fn evaluate_tick(status1: RequestStatus, status2: RequestStatus) -> TickOutcome {
    use RequestStatus::*;

    if status1 == Completed && status2 == Completed {
        return TickOutcome::Completed;
    }
    if status1 == Failed || status2 == Failed {
        return TickOutcome::Failed;
    }
    if status1 == Nsfw || status2 == Nsfw {
        return TickOutcome::Nsfw;
    }
    if status1 == InProgress || status2 == InProgress {
        return TickOutcome::InProgress;
    }
    TickOutcome::NoChange
}
