//! Handler for `POST /api/generate`.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use diptych_core::job::{GenerationJob, LogEntry, LogKind};
use diptych_core::request::{validate_generate_request, GenerateRequest};
use diptych_core::types::JobId;
use diptych_higgsfield::SubmitParams;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::poller;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub job_id: JobId,
}

/// POST /api/generate
///
/// Validates the request, submits both prompts to the generation platform
/// in parallel, stores a freshly queued job, and hands its poll loop to
/// the supervisor. Responds with the job id immediately; the client polls
/// `GET /api/jobs/{id}` for progress.
///
/// If either submission fails, no job is stored and the call fails as a
/// whole.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_generate_request(&input)?;

    let params1 = submit_params(&input, input.prompt1.clone());
    let params2 = submit_params(&input, input.prompt2.clone());

    let (request_id1, request_id2) = futures::future::try_join(
        state.generator.submit(&params1),
        state.generator.submit(&params2),
    )
    .await?;

    let mut logs = vec![LogEntry::new(
        "Starting image generation for 2 prompts...",
        LogKind::Info,
    )];
    logs.push(LogEntry::new(
        format!("Submitted requests: {request_id1}, {request_id2}"),
        LogKind::Info,
    ));

    let job = GenerationJob::new(
        Uuid::new_v4(),
        request_id1,
        request_id2,
        input.prompt1,
        input.prompt2,
        input.image_data_url,
        logs,
    );
    let job_id = job.id;
    state.store.insert(job.clone()).await;

    state.poller.spawn(poller::poll_job(
        Arc::clone(&state.store),
        Arc::clone(&state.generator),
        job,
        state.poll_config,
        state.poller.cancel_token(),
    ));

    tracing::info!(job_id = %job_id, "Generation job started");

    Ok(Json(GenerateResponse { job_id }))
}

fn submit_params(input: &GenerateRequest, prompt: String) -> SubmitParams {
    SubmitParams {
        prompt,
        model: input.model.clone(),
        aspect_ratio: input.aspect_ratio.clone(),
        resolution: input.resolution.clone(),
        source_image: input.image_data_url.clone(),
    }
}
