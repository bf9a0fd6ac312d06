pub mod generate;
pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /generate            POST    start a generation job
/// /jobs                GET     list all jobs
/// /jobs/{id}           GET     job record
/// /jobs/{id}           DELETE  remove job record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generate::router())
        .nest("/jobs", jobs::router())
}
