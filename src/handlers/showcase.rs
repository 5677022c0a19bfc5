//! Featured listings for services and testimonials.

use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::ApiQuery;
use crate::model::{Service, ServiceFilter, Testimonial, TestimonialFilter};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;

const FEATURED_LIMIT: i64 = 3;

pub async fn featured_services(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Service>>, AppError> {
    let filter = ServiceFilter {
        featured: Some(true),
        limit: q.limit_or(FEATURED_LIMIT),
        offset: q.offset,
    };
    let rows = CrudService::list::<Service>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch featured services")?;
    Ok(response::ok(rows))
}

pub async fn featured_testimonials(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Testimonial>>, AppError> {
    let filter = TestimonialFilter {
        featured: Some(true),
        limit: q.limit_or(FEATURED_LIMIT),
        offset: q.offset,
    };
    let rows = CrudService::list::<Testimonial>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch featured testimonials")?;
    Ok(response::ok(rows))
}
