//! Settings addressed by key, and the whole set as one object.

use crate::error::{AppError, ResultExt};
use crate::extractors::ApiJson;
use crate::model::{Resource, Setting, SettingValue};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::sql::{Fields, ToParam};
use crate::state::AppState;
use axum::extract::{Path, State};
use std::collections::BTreeMap;

pub async fn map(
    State(state): State<AppState>,
) -> Result<Reply<BTreeMap<String, String>>, AppError> {
    let settings = Setting::as_map(&state.pool)
        .await
        .or_fault("Failed to fetch settings")?;
    Ok(response::ok(settings))
}

pub async fn read_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Reply<Setting>, AppError> {
    let row = CrudService::find_by::<Setting>(&state.pool, "key", key.to_param())
        .await
        .or_fault("Failed to fetch setting")?
        .ok_or_else(|| AppError::NotFound(Setting::NOUN.not_found()))?;
    Ok(response::ok(row))
}

pub async fn update_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ApiJson(body): ApiJson<SettingValue>,
) -> Result<Reply<Setting>, AppError> {
    let changes = Fields::new().value("value", &body.value).into_assignments();
    let row = CrudService::update_by::<Setting>(&state.pool, ("key", key.to_param()), changes)
        .await
        .or_fault("Failed to update setting")?
        .ok_or_else(|| AppError::NotFound(Setting::NOUN.not_found()))?;
    Ok(response::ok_with_message(row, "Setting updated successfully"))
}

pub async fn delete_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Reply<()>, AppError> {
    let deleted = CrudService::delete_by::<Setting>(&state.pool, ("key", key.to_param()))
        .await
        .or_fault("Failed to delete setting")?;
    if !deleted {
        return Err(AppError::NotFound(Setting::NOUN.not_found()));
    }
    Ok(response::message("Setting deleted successfully"))
}
