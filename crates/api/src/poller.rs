//! Background poll loops and their supervisor.
//!
//! Each accepted generation job gets one poll loop that repeatedly queries
//! both remote sub-requests until the job reaches a terminal status or the
//! attempt cap runs out. Loops are registered with a [`PollSupervisor`] so
//! shutdown (and tests) can cancel and await them instead of leaking
//! detached tasks.

use std::sync::Arc;
use std::time::Duration;

use diptych_core::job::{GenerationJob, JobStatus, LogKind};
use diptych_core::tick::{evaluate_tick, RequestStatus, TickOutcome};
use diptych_higgsfield::{GenerationService, StatusResponse};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::store::JobStore;

/// Default delay between poll ticks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default cap on poll ticks per job (120 ticks at 2 s each, 4 minutes).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 120;

/// Schedule for a poll loop. Injectable so tests can shrink it.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Delay between consecutive poll ticks.
    pub interval: Duration,
    /// Hard cap on poll ticks before the job is failed as timed out.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Tracks every spawned poll loop.
///
/// Wraps a [`TaskTracker`] and a [`CancellationToken`] so the composition
/// root can drain all loops on shutdown and tests can await quiescence.
pub struct PollSupervisor {
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl PollSupervisor {
    pub fn new() -> Self {
        Self {
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token handed to each poll loop; cancelled on shutdown.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    /// Spawn and track a poll loop.
    pub fn spawn<F>(&self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(fut);
    }

    /// Number of loops still running.
    pub fn active(&self) -> usize {
        self.tracker.len()
    }

    /// Wait for all spawned loops to finish on their own.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }

    /// Cancel all loops and wait for them to exit.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}

impl Default for PollSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one job to a terminal status.
///
/// Per tick: query both sub-request statuses in parallel, append a log
/// entry summarizing them, apply the transition rules, and persist the
/// whole record back to the store. A transport or API error during a tick
/// fails the job rather than leaving it stuck at a non-terminal status.
/// Exhausting `config.max_attempts` fails the job as timed out.
pub async fn poll_job(
    store: Arc<JobStore>,
    generator: Arc<dyn GenerationService>,
    mut job: GenerationJob,
    config: PollConfig,
    cancel: CancellationToken,
) {
    for attempt in 1..=config.max_attempts {
        let statuses = futures::future::try_join(
            generator.request_status(&job.request_id1),
            generator.request_status(&job.request_id2),
        )
        .await;

        let (status1, status2) = match statuses {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!(job_id = %job.id, error = %e, "Poll tick failed");
                job.push_log(format!("Polling error: {e}"), LogKind::Error);
                job.status = JobStatus::Failed;
                store.insert(job).await;
                return;
            }
        };

        job.push_log(
            format!(
                "Polling attempt {attempt}: Prompt1={}, Prompt2={}",
                status1.status, status2.status
            ),
            LogKind::Pending,
        );

        if apply_tick(&mut job, &status1, &status2) {
            tracing::info!(job_id = %job.id, status = ?job.status, attempt, "Job reached terminal status");
            store.insert(job).await;
            return;
        }
        store.insert(job.clone()).await;

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(job_id = %job.id, "Poll loop cancelled");
                return;
            }
            _ = tokio::time::sleep(config.interval) => {}
        }
    }

    tracing::warn!(job_id = %job.id, attempts = config.max_attempts, "Job timed out");
    job.status = JobStatus::Failed;
    job.push_log("Timeout: Generation took too long", LogKind::Error);
    store.insert(job).await;
}

/// Apply one tick's observations to the job. Returns whether the job
/// reached a terminal status.
fn apply_tick(job: &mut GenerationJob, status1: &StatusResponse, status2: &StatusResponse) -> bool {
    let outcome = evaluate_tick(
        RequestStatus::parse(&status1.status),
        RequestStatus::parse(&status2.status),
    );

    match outcome {
        TickOutcome::Completed => {
            job.status = JobStatus::Completed;
            job.generated_image_url1 = status1.first_image_url();
            job.generated_image_url2 = status2.first_image_url();
            job.push_log("Both images generated successfully", LogKind::Success);
        }
        TickOutcome::Failed => {
            job.status = JobStatus::Failed;
            job.push_log("One or more image generations failed", LogKind::Error);
        }
        TickOutcome::Nsfw => {
            job.status = JobStatus::Nsfw;
            job.push_log("Content flagged as inappropriate", LogKind::Error);
        }
        TickOutcome::InProgress => {
            job.status = JobStatus::InProgress;
        }
        TickOutcome::NoChange => {}
    }

    outcome.is_terminal()
}
