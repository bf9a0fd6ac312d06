use std::net::SocketAddr;
use std::sync::Arc;

use diptych_api::config::ServerConfig;
use diptych_api::poller::{PollConfig, PollSupervisor};
use diptych_api::router::build_app_router;
use diptych_api::state::AppState;
use diptych_api::store::JobStore;
use diptych_higgsfield::{HiggsfieldClient, HiggsfieldConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diptych_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // Fail fast when the platform credentials are absent.
    let higgsfield_config = HiggsfieldConfig::from_env().unwrap_or_else(|e| panic!("{e}"));
    tracing::info!(base_url = %higgsfield_config.base_url, "Loaded Higgsfield configuration");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(JobStore::new()),
        generator: Arc::new(HiggsfieldClient::new(higgsfield_config)),
        poller: Arc::new(PollSupervisor::new()),
        poll_config: PollConfig::default(),
    };
    let poller = Arc::clone(&state.poller);

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Cancel and drain all active poll loops.
    let active = poller.active();
    tracing::info!(active, "Stopping poll loops");
    poller.shutdown().await;

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
