//! Job board listings and a job's applications.

use super::resource::parse_id;
use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::ApiQuery;
use crate::model::{Job, JobApplication, JobApplicationFilter, JobFilter, JobStatus};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};

const PAGE_LIMIT: i64 = 10;

async fn fetch(state: &AppState, filter: JobFilter) -> Result<Reply<Vec<Job>>, AppError> {
    let rows = CrudService::list::<Job>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch jobs")?;
    Ok(response::ok(rows))
}

/// Open jobs that have not expired.
pub async fn open(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Job>>, AppError> {
    let filter = JobFilter {
        status: Some(JobStatus::Open),
        limit: q.limit_or(PAGE_LIMIT),
        offset: q.offset,
        unexpired: true,
        ..Default::default()
    };
    fetch(&state, filter).await
}

pub async fn by_type(
    State(state): State<AppState>,
    Path(job_type): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Job>>, AppError> {
    let filter = JobFilter {
        job_type: Some(job_type),
        limit: q.limit_or(PAGE_LIMIT),
        offset: q.offset,
        ..Default::default()
    };
    fetch(&state, filter).await
}

pub async fn by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Job>>, AppError> {
    let filter = JobFilter {
        department: Some(department),
        limit: q.limit_or(PAGE_LIMIT),
        offset: q.offset,
        ..Default::default()
    };
    fetch(&state, filter).await
}

/// Applications received for one job, newest first.
pub async fn applications(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<JobApplication>>, AppError> {
    let filter = JobApplicationFilter {
        job_id: Some(parse_id::<Job>(&id)?),
        limit: q.limit,
        offset: q.offset,
        ..Default::default()
    };
    let rows = CrudService::list::<JobApplication>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch job applications")?;
    Ok(response::ok(rows))
}
