//! HTTP client for the Higgsfield image-generation platform.
//!
//! [`HiggsfieldClient`] wraps the two calls the backend needs: submitting a
//! generation request and polling a request's status. The
//! [`GenerationService`] trait is the seam the API crate depends on, so
//! tests can substitute a scripted fake for the real platform.

pub mod client;
pub mod config;
pub mod types;

pub use client::{GenerationService, HiggsfieldClient, HiggsfieldError};
pub use config::HiggsfieldConfig;
pub use types::{GeneratedImage, ImageItem, StatusResponse, SubmitParams, SubmitRequest, SubmitResponse};
