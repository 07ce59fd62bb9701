pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::matching::handlers as matching;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit =
        DefaultBodyLimit::max(state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES);
    let json_limit = DefaultBodyLimit::max(state.config.max_json_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route(
            "/api/v1/resumes/parse",
            post(extraction::handle_parse_resume).layer(upload_limit),
        )
        // Matching
        .route(
            "/api/v1/matches/score",
            post(matching::handle_score).layer(json_limit),
        )
        .route(
            "/api/v1/matches/candidate-to-jobs",
            post(matching::handle_candidate_to_jobs).layer(json_limit),
        )
        .route(
            "/api/v1/matches/job-to-candidates",
            post(matching::handle_job_to_candidates).layer(json_limit),
        )
        .with_state(state)
}
