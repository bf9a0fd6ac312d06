//! In-memory job store.
//!
//! Pure key-value semantics: no TTL, no capacity bound, no durability
//! across restarts. The status endpoint reads concurrently with writes
//! from poll loops, so access goes through an `RwLock`.

use std::collections::HashMap;

use diptych_core::job::GenerationJob;
use diptych_core::types::JobId;
use tokio::sync::RwLock;

/// Holds every job the process has accepted, keyed by job id.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct JobStore {
    jobs: RwLock<HashMap<JobId, GenerationJob>>,
}

impl JobStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a job record. Poll loops persist the full record
    /// back here on every tick.
    pub async fn insert(&self, job: GenerationJob) {
        self.jobs.write().await.insert(job.id, job);
    }

    /// Snapshot of one job, if present.
    pub async fn get(&self, id: JobId) -> Option<GenerationJob> {
        self.jobs.read().await.get(&id).cloned()
    }

    /// Remove a job record. Returns whether it existed.
    pub async fn remove(&self, id: JobId) -> bool {
        self.jobs.write().await.remove(&id).is_some()
    }

    /// Snapshot of all stored jobs, in no particular order.
    pub async fn list(&self) -> Vec<GenerationJob> {
        self.jobs.read().await.values().cloned().collect()
    }

    /// Number of stored jobs.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}
