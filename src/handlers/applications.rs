use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::ApiQuery;
use crate::model::{ApplicationStatus, JobApplication, JobApplicationFilter};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};

const STATUS_LIMIT: i64 = 10;

pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<JobApplication>>, AppError> {
    let filter = JobApplicationFilter {
        status: Some(status.parse::<ApplicationStatus>()?),
        limit: q.limit_or(STATUS_LIMIT),
        offset: q.offset,
        ..Default::default()
    };
    let rows = CrudService::list::<JobApplication>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch job applications")?;
    Ok(response::ok(rows))
}
