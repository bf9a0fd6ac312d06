use std::sync::Arc;

use diptych_higgsfield::GenerationService;

use crate::config::ServerConfig;
use crate::poller::{PollConfig, PollSupervisor};
use crate::store::JobStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Copy`).
/// Everything here is constructed and injected by the composition root
/// (`main.rs` or the test harness); there is no global singleton.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory job store.
    pub store: Arc<JobStore>,
    /// Remote generation service (real client in production, fake in tests).
    pub generator: Arc<dyn GenerationService>,
    /// Supervisor tracking all poll loops.
    pub poller: Arc<PollSupervisor>,
    /// Schedule for poll loops started by the generate endpoint.
    pub poll_config: PollConfig,
}
