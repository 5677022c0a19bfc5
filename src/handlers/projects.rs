use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::ApiQuery;
use crate::model::{Project, ProjectFilter, ProjectStatus};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};

const FEATURED_LIMIT: i64 = 3;

async fn fetch(state: &AppState, filter: ProjectFilter) -> Result<Reply<Vec<Project>>, AppError> {
    let rows = CrudService::list::<Project>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch projects")?;
    Ok(response::ok(rows))
}

pub async fn featured(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Project>>, AppError> {
    let filter = ProjectFilter {
        featured: Some(true),
        limit: q.limit_or(FEATURED_LIMIT),
        offset: q.offset,
        ..Default::default()
    };
    fetch(&state, filter).await
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Project>>, AppError> {
    let filter = ProjectFilter {
        category: Some(category),
        limit: q.limit,
        offset: q.offset,
        ..Default::default()
    };
    fetch(&state, filter).await
}

/// An unknown status in the path is a 400.
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Project>>, AppError> {
    let filter = ProjectFilter {
        status: Some(status.parse::<ProjectStatus>()?),
        limit: q.limit,
        offset: q.offset,
        ..Default::default()
    };
    fetch(&state, filter).await
}
