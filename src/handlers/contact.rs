//! Contact form intake.

use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::{ApiJson, ApiQuery};
use crate::model::{ContactForm, ContactSubmission, ContactSubmissionFilter, SubmissionStatus};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};

const STATUS_LIMIT: i64 = 10;

/// Validates the form before touching the store. New submissions are always pending.
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<Reply<ContactSubmission>, AppError> {
    let input = form.validate()?;
    let row = CrudService::create::<ContactSubmission>(&state.pool, &input)
        .await
        .or_fault("Failed to submit contact form")?;
    Ok(response::created(row, "Contact form submitted successfully"))
}

pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<ContactSubmission>>, AppError> {
    let filter = ContactSubmissionFilter {
        status: Some(status.parse::<SubmissionStatus>()?),
        limit: q.limit_or(STATUS_LIMIT),
        offset: q.offset,
    };
    let rows = CrudService::list::<ContactSubmission>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch contact submissions")?;
    Ok(response::ok(rows))
}
