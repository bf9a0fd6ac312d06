//! The inbound generation request and its validation.

use serde::Deserialize;

use crate::error::CoreError;

/// Default model path on the remote platform.
pub const DEFAULT_MODEL: &str = "higgsfield-ai/nano-banana";
/// Default aspect ratio for generated images.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
/// Default output resolution.
pub const DEFAULT_RESOLUTION: &str = "720p";

/// Body of `POST /api/generate`.
///
/// `model`, `aspect_ratio`, and `resolution` are optional with defaults and
/// are passed through to the remote submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt1: String,
    pub prompt2: String,
    pub image_data_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_resolution")]
    pub resolution: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

fn default_resolution() -> String {
    DEFAULT_RESOLUTION.to_string()
}

/// Validate a generation request before any remote call is made.
///
/// Both prompts must be non-empty (whitespace-only counts as empty).
pub fn validate_generate_request(req: &GenerateRequest) -> Result<(), CoreError> {
    if req.prompt1.trim().is_empty() {
        return Err(CoreError::Validation("Prompt 1 is required".to_string()));
    }
    if req.prompt2.trim().is_empty() {
        return Err(CoreError::Validation("Prompt 2 is required".to_string()));
    }
    Ok(())
}
