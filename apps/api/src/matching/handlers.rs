//! Axum route handlers for scoring and ranking.
//!
//! Batch ranking is CPU-bound, so it runs inside `tokio::task::spawn_blocking`.

use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{match_many_to_one, match_one_to_many, score};
use crate::models::{
    CandidateEntry, ExtractedProfile, JobPosting, JobRequirement, MatchScore, RankedMatch,
};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: ExtractedProfile,
    pub requirement: JobRequirement,
}

#[derive(Debug, Deserialize)]
pub struct CandidateToJobsRequest {
    pub profile: ExtractedProfile,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Deserialize)]
pub struct JobToCandidatesRequest {
    pub requirement: JobRequirement,
    pub candidates: Vec<CandidateEntry>,
}

#[derive(Debug, Serialize)]
pub struct RankedMatchesResponse {
    pub matches: Vec<RankedMatch<Uuid>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchScore>, AppError> {
    let result = score(&request.profile, &request.requirement)?;
    Ok(Json(result))
}

/// POST /api/v1/matches/candidate-to-jobs
///
/// Ranks every supplied job for one candidate, best first.
pub async fn handle_candidate_to_jobs(
    Json(request): Json<CandidateToJobsRequest>,
) -> Result<Json<RankedMatchesResponse>, AppError> {
    let CandidateToJobsRequest { profile, jobs } = request;
    let jobs: Vec<(Uuid, JobRequirement)> =
        jobs.into_iter().map(|j| (j.id, j.requirement)).collect();

    let matches = tokio::task::spawn_blocking(move || match_one_to_many(&profile, &jobs))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}"))
        })?;

    Ok(Json(RankedMatchesResponse { matches }))
}

/// POST /api/v1/matches/job-to-candidates
///
/// Ranks every supplied candidate for one job, best first.
pub async fn handle_job_to_candidates(
    Json(request): Json<JobToCandidatesRequest>,
) -> Result<Json<RankedMatchesResponse>, AppError> {
    let JobToCandidatesRequest {
        requirement,
        candidates,
    } = request;
    let candidates: Vec<(Uuid, ExtractedProfile)> =
        candidates.into_iter().map(|c| (c.id, c.profile)).collect();

    let matches = tokio::task::spawn_blocking(move || match_many_to_one(&requirement, &candidates))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}"))
        })?;

    Ok(Json(RankedMatchesResponse { matches }))
}
