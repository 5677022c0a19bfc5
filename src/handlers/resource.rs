//! Generic CRUD handlers, instantiated once per resource type in the router.

use crate::error::{AppError, ResultExt};
use crate::extractors::{ApiJson, ApiQuery};
use crate::model::{Resource, Slugged};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::sql::ToParam;
use crate::state::AppState;
use axum::extract::{Path, State};
use serde_json::{json, Value};
use uuid::Uuid;

/// Path ids that are not UUIDs cannot match a row, so they are reported as not found.
pub(crate) fn parse_id<R: Resource>(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(R::NOUN.not_found()))
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<R::Filter>,
) -> Result<Reply<Vec<R>>, AppError> {
    let rows = CrudService::list::<R>(&state.pool, &filter)
        .await
        .or_fault(format!("Failed to fetch {}", R::NOUN.plural))?;
    Ok(response::ok(rows))
}

pub async fn count<R: Resource>(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<R::Filter>,
) -> Result<Reply<Value>, AppError> {
    let count = CrudService::count::<R>(&state.pool, &filter)
        .await
        .or_fault(format!("Failed to count {}", R::NOUN.plural))?;
    Ok(response::ok(json!({ "count": count })))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Reply<R>, AppError> {
    let id = parse_id::<R>(&id)?;
    let row = CrudService::read::<R>(&state.pool, id)
        .await
        .or_fault(format!("Failed to fetch {}", R::NOUN.singular))?
        .ok_or_else(|| AppError::NotFound(R::NOUN.not_found()))?;
    Ok(response::ok(row))
}

pub async fn read_by_slug<R: Slugged>(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Reply<R>, AppError> {
    let row = CrudService::find_by::<R>(&state.pool, "slug", slug.to_param())
        .await
        .or_fault(format!("Failed to fetch {}", R::NOUN.singular))?
        .ok_or_else(|| AppError::NotFound(R::NOUN.not_found()))?;
    Ok(response::ok(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<R::New>,
) -> Result<Reply<R>, AppError> {
    let row = CrudService::create::<R>(&state.pool, &input)
        .await
        .or_fault(format!("Failed to create {}", R::NOUN.singular))?;
    Ok(response::created(row, format!("{} created successfully", R::NOUN.label)))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<R::Patch>,
) -> Result<Reply<R>, AppError> {
    let id = parse_id::<R>(&id)?;
    let row = CrudService::update::<R>(&state.pool, id, &patch)
        .await
        .or_fault(format!("Failed to update {}", R::NOUN.singular))?
        .ok_or_else(|| AppError::NotFound(R::NOUN.not_found()))?;
    Ok(response::ok_with_message(row, format!("{} updated successfully", R::NOUN.label)))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Reply<()>, AppError> {
    let id = parse_id::<R>(&id)?;
    let deleted = CrudService::delete::<R>(&state.pool, id)
        .await
        .or_fault(format!("Failed to delete {}", R::NOUN.singular))?;
    if !deleted {
        return Err(AppError::NotFound(R::NOUN.not_found()));
    }
    Ok(response::message(format!("{} deleted successfully", R::NOUN.label)))
}
