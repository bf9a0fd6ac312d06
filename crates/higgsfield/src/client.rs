//! The Higgsfield HTTP client and the [`GenerationService`] seam.

use std::time::Duration;

use crate::config::HiggsfieldConfig;
use crate::types::{StatusResponse, SubmitParams, SubmitRequest, SubmitResponse};

/// HTTP request timeout for a single platform call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from talking to the generation platform.
///
/// No retry policy lives here; a failure propagates to the caller (the
/// generate endpoint during submission, the poll loop during polling).
#[derive(Debug, thiserror::Error)]
pub enum HiggsfieldError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform returned a non-success HTTP status.
    #[error("Higgsfield API error: {status} {reason}")]
    Api { status: u16, reason: String },
}

/// The two remote operations the backend needs.
///
/// Implemented by [`HiggsfieldClient`] for production and by scripted fakes
/// in tests, so endpoint and poll-loop behavior can be exercised without
/// the platform.
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    /// Submit one generation sub-request; returns the platform request id.
    async fn submit(&self, params: &SubmitParams) -> Result<String, HiggsfieldError>;

    /// Fetch the current status of one sub-request.
    async fn request_status(&self, request_id: &str) -> Result<StatusResponse, HiggsfieldError>;
}

/// Client for the Higgsfield platform REST API.
pub struct HiggsfieldClient {
    client: reqwest::Client,
    config: HiggsfieldConfig,
}

impl HiggsfieldClient {
    /// Create a client with a pre-configured HTTP client.
    pub fn new(config: HiggsfieldConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// `Authorization: Key <key>:<secret>` per the platform's auth scheme.
    fn auth_header(&self) -> String {
        format!("Key {}:{}", self.config.api_key, self.config.api_secret)
    }
}

#[async_trait::async_trait]
impl GenerationService for HiggsfieldClient {
    async fn submit(&self, params: &SubmitParams) -> Result<String, HiggsfieldError> {
        let url = format!("{}/{}", self.config.base_url, params.model);
        let body = SubmitRequest::from_params(params);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HiggsfieldError::Api {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }

        let submitted: SubmitResponse = response.json().await?;
        tracing::debug!(
            request_id = %submitted.request_id,
            model = %params.model,
            "Submitted generation request"
        );
        Ok(submitted.request_id)
    }

    async fn request_status(&self, request_id: &str) -> Result<StatusResponse, HiggsfieldError> {
        let url = format!("{}/requests/{}/status", self.config.base_url, request_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(HiggsfieldError::Api {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
