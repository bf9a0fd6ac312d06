//! Handlers for the `/jobs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use diptych_core::error::CoreError;
use diptych_core::types::JobId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/jobs
///
/// List all stored jobs, in no particular order.
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = state.store.list().await;
    Ok(Json(jobs))
}

/// GET /api/jobs/{id}
///
/// Return the stored job record verbatim, or 404 if absent.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<JobId>,
) -> AppResult<impl IntoResponse> {
    let job = state
        .store
        .get(job_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }))?;

    Ok(Json(job))
}

/// DELETE /api/jobs/{id}
///
/// Remove a job record. The job's poll loop, if still running, keeps its
/// own copy and will simply re-insert its final state; deletion is a
/// client-side cleanup affordance, not cancellation.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<JobId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.remove(job_id).await {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }));
    }

    tracing::info!(job_id = %job_id, "Job record deleted");
    Ok(StatusCode::NO_CONTENT)
}
