//! Shared harness for the API integration tests.
//!
//! Builds the full production router (same middleware stack as `main.rs`)
//! around a scripted [`FakeGenerationService`], so endpoint and lifecycle
//! behavior can be exercised without the real platform.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use diptych_api::config::ServerConfig;
use diptych_api::poller::{PollConfig, PollSupervisor};
use diptych_api::router::build_app_router;
use diptych_api::state::AppState;
use diptych_api::store::JobStore;
use diptych_higgsfield::{GenerationService, HiggsfieldError, StatusResponse, SubmitParams};

/// Scripted stand-in for the Higgsfield platform.
///
/// Submissions hand out `req-1`, `req-2`, ... in call order (or fail when
/// configured to). Each request id can be scripted with a queue of status
/// results; the final entry repeats once drained, and unscripted ids
/// report `queued` forever.
pub struct FakeGenerationService {
    submit_calls: AtomicUsize,
    fail_submit: bool,
    scripts: Mutex<HashMap<String, VecDeque<Result<StatusResponse, String>>>>,
}

impl FakeGenerationService {
    pub fn new() -> Self {
        Self {
            submit_calls: AtomicUsize::new(0),
            fail_submit: false,
            scripts: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing_submit() -> Self {
        Self {
            fail_submit: true,
            ..Self::new()
        }
    }

    /// Script the status sequence for one request id.
    pub fn script(&self, request_id: &str, steps: Vec<Result<StatusResponse, String>>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(request_id.to_string(), steps.into());
    }

    pub fn submit_count(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }
}

pub fn status(s: &str) -> Result<StatusResponse, String> {
    Ok(StatusResponse {
        status: s.to_string(),
        images: None,
    })
}

pub fn completed(url: &str) -> Result<StatusResponse, String> {
    Ok(StatusResponse {
        status: "completed".to_string(),
        images: Some(vec![diptych_higgsfield::GeneratedImage {
            url: url.to_string(),
        }]),
    })
}

#[async_trait::async_trait]
impl GenerationService for FakeGenerationService {
    async fn submit(&self, _params: &SubmitParams) -> Result<String, HiggsfieldError> {
        let n = self.submit_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_submit {
            return Err(HiggsfieldError::Api {
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        Ok(format!("req-{n}"))
    }

    async fn request_status(&self, request_id: &str) -> Result<StatusResponse, HiggsfieldError> {
        let mut scripts = self.scripts.lock().unwrap();
        let step = match scripts.get_mut(request_id) {
            Some(steps) if steps.len() > 1 => steps.pop_front().unwrap(),
            Some(steps) => steps.front().cloned().unwrap(),
            None => status("queued"),
        };
        step.map_err(|reason| HiggsfieldError::Api {
            status: 500,
            reason,
        })
    }
}

/// The assembled application plus the pieces tests inspect directly.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<JobStore>,
    pub poller: Arc<PollSupervisor>,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// A poll schedule slow enough that freshly created jobs stay observable
/// in their initial state for the duration of a test request.
pub fn slow_poll() -> PollConfig {
    PollConfig {
        interval: Duration::from_secs(60),
        max_attempts: 120,
    }
}

/// A poll schedule that drives jobs to their terminal state in
/// milliseconds.
pub fn fast_poll(max_attempts: u32) -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(1),
        max_attempts,
    }
}

/// Build the full application router around the given fake service.
///
/// Mirrors the state construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(service: Arc<FakeGenerationService>, poll_config: PollConfig) -> TestApp {
    let config = test_config();
    let store = Arc::new(JobStore::new());
    let poller = Arc::new(PollSupervisor::new());

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::clone(&store),
        generator: service,
        poller: Arc::clone(&poller),
        poll_config,
    };

    TestApp {
        app: build_app_router(state, &config),
        store,
        poller,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is an error with the expected status and message.
pub async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["error"], message);
}
