//! Generic CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::{Changeset, Insert, ListFilter, Resource};
use crate::sql::{self, QueryBuf, SqlParam, ToParam};
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

pub struct CrudService;

impl CrudService {
    /// List rows matching the filter's equality predicates, in the resource's order.
    /// Without a limit the whole ordered set is returned.
    pub async fn list<R: Resource>(pool: &PgPool, filter: &R::Filter) -> Result<Vec<R>, AppError> {
        let q = sql::select_list(R::TABLE, &filter.predicates(), R::ORDER_BY, filter.page());
        Self::fetch_all(pool, q).await
    }

    /// Count rows matching the filter's predicates. Paging is ignored.
    pub async fn count<R: Resource>(pool: &PgPool, filter: &R::Filter) -> Result<i64, AppError> {
        let q = sql::count(R::TABLE, &filter.predicates());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in q.params.iter().cloned() {
            query = query.bind(p);
        }
        Ok(query.fetch_one(pool).await?)
    }

    /// Fetch one row by primary key.
    pub async fn read<R: Resource>(pool: &PgPool, id: Uuid) -> Result<Option<R>, AppError> {
        Self::find_by(pool, "id", id.to_param()).await
    }

    /// Fetch one row by a unique column (slug, email, key).
    pub async fn find_by<R: Resource>(
        pool: &PgPool,
        column: &'static str,
        value: SqlParam,
    ) -> Result<Option<R>, AppError> {
        let q = sql::select_by(R::TABLE, column, value);
        Self::fetch_optional(pool, q).await
    }

    /// Insert one row. Returns the created row with its generated id and timestamps.
    pub async fn create<R: Resource>(pool: &PgPool, input: &R::New) -> Result<R, AppError> {
        let q = sql::insert(R::TABLE, input.assignments());
        Self::fetch_optional(pool, q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Insert, or update the row that already holds the `conflict` column's value.
    /// Returns the row and whether it was newly inserted.
    pub async fn upsert<R: Resource>(
        pool: &PgPool,
        input: &R::New,
        conflict: &'static str,
        on_conflict: sql::Assignments,
    ) -> Result<(R, bool), AppError> {
        let q = sql::upsert(R::TABLE, input.assignments(), conflict, on_conflict);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params.iter().cloned() {
            query = query.bind(p);
        }
        let row = query.fetch_one(pool).await?;
        let inserted: bool = row.try_get(sql::INSERTED_COLUMN)?;
        Ok((R::from_row(&row)?, inserted))
    }

    /// Apply a sparse patch by id. An empty patch is a plain read.
    pub async fn update<R: Resource>(
        pool: &PgPool,
        id: Uuid,
        patch: &R::Patch,
    ) -> Result<Option<R>, AppError> {
        Self::update_by(pool, ("id", id.to_param()), patch.changes()).await
    }

    /// Apply assignments to the row identified by a unique column.
    pub async fn update_by<R: Resource>(
        pool: &PgPool,
        key: (&'static str, SqlParam),
        changes: sql::Assignments,
    ) -> Result<Option<R>, AppError> {
        let q = sql::update(R::TABLE, key, changes);
        Self::fetch_optional(pool, q).await
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete<R: Resource>(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
        Self::delete_by::<R>(pool, ("id", id.to_param())).await
    }

    /// Delete by a unique column. Returns whether a row was removed.
    pub async fn delete_by<R: Resource>(
        pool: &PgPool,
        key: (&'static str, SqlParam),
    ) -> Result<bool, AppError> {
        let q = sql::delete(R::TABLE, key);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params.iter().cloned() {
            query = query.bind(p);
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_all<R: Resource>(pool: &PgPool, q: QueryBuf) -> Result<Vec<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in q.params.iter().cloned() {
            query = query.bind(p);
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn fetch_optional<R: Resource>(
        pool: &PgPool,
        q: QueryBuf,
    ) -> Result<Option<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in q.params.iter().cloned() {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(pool).await?)
    }
}
