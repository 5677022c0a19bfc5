//! Published-article listings.

use super::resource::parse_id;
use super::LimitQuery;
use crate::error::{AppError, ResultExt};
use crate::extractors::ApiQuery;
use crate::model::{Article, ArticleFilter, ArticleStatus, Category};
use crate::response::{self, Reply};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};

const FEATURED_LIMIT: i64 = 3;
const CATEGORY_LIMIT: i64 = 10;

/// Most recently published articles.
pub async fn featured(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Article>>, AppError> {
    let filter = ArticleFilter {
        status: Some(ArticleStatus::Published),
        limit: q.limit_or(FEATURED_LIMIT),
        ..Default::default()
    };
    let rows = CrudService::list::<Article>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch featured articles")?;
    Ok(response::ok(rows))
}

/// Published articles in one category.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    ApiQuery(q): ApiQuery<LimitQuery>,
) -> Result<Reply<Vec<Article>>, AppError> {
    let filter = ArticleFilter {
        status: Some(ArticleStatus::Published),
        category_id: Some(parse_id::<Category>(&category_id)?),
        limit: q.limit_or(CATEGORY_LIMIT),
        offset: q.offset,
    };
    let rows = CrudService::list::<Article>(&state.pool, &filter)
        .await
        .or_fault("Failed to fetch articles")?;
    Ok(response::ok(rows))
}
