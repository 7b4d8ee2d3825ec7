//! Axum route handlers for the job catalog.

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::jobs::catalog::{filter_jobs, list_jobs, search_by_keyword};
use crate::jobs::matching::JobFilter;
use crate::models::job::Job;
use crate::payload::{body_or_empty, coerce_int, lenient_json};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub skill: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    pub skill: Option<Value>,
    pub min_experience: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<String>,
}

/// GET /jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = list_jobs(&state.db).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// POST /jobs/search
///
/// Keyword search for bot webhooks. Always answers 200 with a string list;
/// any failure degrades to an empty list so the caller stays on its success path.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<JobSearchResponse> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Job search body could not be read: {rejection}; returning no jobs");
            return Json(JobSearchResponse { jobs: Vec::new() });
        }
    };
    let request: SearchRequest = lenient_json(&body);

    let keyword = match request.skill {
        None => String::new(),
        Some(Value::String(skill)) => skill,
        Some(other) => {
            warn!("Job search received non-text skill {other}; returning no jobs");
            return Json(JobSearchResponse { jobs: Vec::new() });
        }
    };

    let jobs = search_by_keyword(&state.db, &keyword)
        .await
        .unwrap_or_else(|e| {
            error!("Job search failed: {e}");
            Vec::new()
        });

    Json(JobSearchResponse { jobs })
}

/// POST /jobs/filter
///
/// Structured filter by exact skill tag and minimum experience.
pub async fn handle_filter_jobs(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<JobListResponse>, AppError> {
    let request: FilterRequest = lenient_json(&body_or_empty(body));
    let skill = request
        .skill
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or("");
    let filter = JobFilter::new(skill, coerce_int(request.min_experience.as_ref()));

    let jobs = filter_jobs(&state.db, &filter).await?;
    Ok(Json(JobListResponse { jobs }))
}
