//! Wire types for the Higgsfield platform API.

use serde::{Deserialize, Serialize};

/// Everything needed to submit one sub-request.
///
/// `model` selects the endpoint path (`{base}/{model}`); the remaining
/// fields go into the request body.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: String,
    pub resolution: String,
    /// Optional source image as a data URL, shared by both sub-requests.
    pub source_image: Option<String>,
}

/// JSON body of `POST {base}/{model}`.
#[derive(Debug, Serialize)]
pub struct SubmitRequest {
    pub prompt: String,
    pub aspect_ratio: String,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ImageItem>>,
}

/// One input attachment on a submission.
#[derive(Debug, Serialize)]
pub struct ImageItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
}

impl ImageItem {
    pub fn image(url: String) -> Self {
        Self { kind: "image", url }
    }
}

impl SubmitRequest {
    pub fn from_params(params: &SubmitParams) -> Self {
        Self {
            prompt: params.prompt.clone(),
            aspect_ratio: params.aspect_ratio.clone(),
            resolution: params.resolution.clone(),
            items: params
                .source_image
                .clone()
                .map(|url| vec![ImageItem::image(url)]),
        }
    }
}

/// Response to a submission: the platform-side request id to poll.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub request_id: String,
}

/// Response of `GET {base}/requests/{id}/status`.
///
/// `status` is kept as the raw string; the poll loop parses it with
/// `RequestStatus::parse` so unrecognized values degrade gracefully.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub images: Option<Vec<GeneratedImage>>,
}

/// One generated output image.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

impl StatusResponse {
    /// URL of the first generated image, if any.
    pub fn first_image_url(&self) -> Option<String> {
        self.images
            .as_ref()
            .and_then(|imgs| imgs.first())
            .map(|img| img.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_body_omits_items_without_source_image() {
        let params = SubmitParams {
            prompt: "a cat".into(),
            model: "higgsfield-ai/nano-banana".into(),
            aspect_ratio: "16:9".into(),
            resolution: "720p".into(),
            source_image: None,
        };
        let body = serde_json::to_value(SubmitRequest::from_params(&params)).unwrap();

        assert_eq!(body["prompt"], "a cat");
        assert_eq!(body["aspect_ratio"], "16:9");
        assert_eq!(body["resolution"], "720p");
        assert!(body.get("items").is_none());
    }

    #[test]
    fn submit_body_includes_typed_image_item() {
        let params = SubmitParams {
            prompt: "a cat".into(),
            model: "higgsfield-ai/nano-banana".into(),
            aspect_ratio: "16:9".into(),
            resolution: "720p".into(),
            source_image: Some("data:image/png;base64,AAAA".into()),
        };
        let body = serde_json::to_value(SubmitRequest::from_params(&params)).unwrap();

        assert_eq!(body["items"][0]["type"], "image");
        assert_eq!(body["items"][0]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn status_response_parses_with_and_without_images() {
        let with: StatusResponse = serde_json::from_str(
            r#"{"status": "completed", "images": [{"url": "https://cdn/img.png"}]}"#,
        )
        .unwrap();
        assert_eq!(with.status, "completed");
        assert_eq!(with.first_image_url().as_deref(), Some("https://cdn/img.png"));

        let without: StatusResponse = serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert_eq!(without.status, "queued");
        assert!(without.first_image_url().is_none());
    }

    #[test]
    fn empty_image_list_yields_no_url() {
        let resp: StatusResponse =
            serde_json::from_str(r#"{"status": "completed", "images": []}"#).unwrap();
        assert!(resp.first_image_url().is_none());
    }
}
