//! Builds parameterized SELECT, INSERT, UPDATE, DELETE and COUNT statements.
//! Identifiers come from resource constants only; every value is a `$n` parameter.

use super::params::SqlParam;

/// Upper bound applied to any requested page size.
pub const MAX_LIMIT: i64 = 1000;

/// Quote identifier for PostgreSQL (safe: only from resource constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// One AND-ed condition of a list or count query.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// `column = $n`
    Eq(&'static str, SqlParam),
    /// `(column IS NULL OR column > NOW())`
    NotExpired(&'static str),
}

/// Optional LIMIT/OFFSET. Zero or negative values are treated as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Page {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Page { limit, offset }
    }

    fn limit(&self) -> Option<i64> {
        self.limit.filter(|n| *n > 0).map(|n| n.min(MAX_LIMIT))
    }

    fn offset(&self) -> Option<i64> {
        self.offset.filter(|n| *n > 0)
    }
}

/// Ordered column assignments for INSERT and UPDATE, and equality predicates for filters.
pub type Assignments = Vec<(&'static str, SqlParam)>;

fn where_clause(q: &mut QueryBuf, predicates: &[Predicate]) -> String {
    let parts: Vec<String> = predicates
        .iter()
        .map(|p| match p {
            Predicate::Eq(col, val) => {
                let n = q.push_param(val.clone());
                format!("{} = ${}", quoted(col), n)
            }
            Predicate::NotExpired(col) => {
                format!("({0} IS NULL OR {0} > NOW())", quoted(col))
            }
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", parts.join(" AND "))
    }
}

/// SELECT one row by a unique column (id, slug, email, key).
pub fn select_by(table: &str, column: &str, value: SqlParam) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(value);
    q.sql = format!("SELECT * FROM {} WHERE {} = ${}", quoted(table), quoted(column), n);
    q
}

/// SELECT list: AND-ed predicates, resource order, optional LIMIT/OFFSET (bound as params).
pub fn select_list(table: &str, predicates: &[Predicate], order_by: &str, page: Page) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(&mut q, predicates);
    let mut sql = format!("SELECT * FROM {}{} ORDER BY {}", quoted(table), where_sql, order_by);
    if let Some(limit) = page.limit() {
        let n = q.push_param(SqlParam::BigInt(Some(limit)));
        sql.push_str(&format!(" LIMIT ${}", n));
    }
    if let Some(offset) = page.offset() {
        let n = q.push_param(SqlParam::BigInt(Some(offset)));
        sql.push_str(&format!(" OFFSET ${}", n));
    }
    q.sql = sql;
    q
}

/// SELECT COUNT(*) with the same predicates a list would use.
pub fn count(table: &str, predicates: &[Predicate]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(&mut q, predicates);
    q.sql = format!("SELECT COUNT(*) FROM {}{}", quoted(table), where_sql);
    q
}

/// INSERT only the supplied columns; omitted ones fall back to column defaults.
pub fn insert(table: &str, values: Assignments) -> QueryBuf {
    let mut q = QueryBuf::new();
    if values.is_empty() {
        q.sql = format!("INSERT INTO {} DEFAULT VALUES RETURNING *", quoted(table));
        return q;
    }
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quoted(table),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by a unique column: SET only the supplied columns plus `updated_at`.
/// With no changes this is a plain SELECT of the same row.
pub fn update(table: &str, key: (&str, SqlParam), changes: Assignments) -> QueryBuf {
    let (key_col, key_val) = key;
    if changes.is_empty() {
        return select_by(table, key_col, key_val);
    }
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(changes.len() + 1);
    for (col, val) in changes {
        let n = q.push_param(val);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    let n = q.push_param(key_val);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
        quoted(table),
        sets.join(", "),
        quoted(key_col),
        n
    );
    q
}

/// Name of the boolean column [`upsert`] adds to the returned row.
pub const INSERTED_COLUMN: &str = "inserted";

/// INSERT, or when `conflict` (a unique column) already holds the value, UPDATE that
/// row with `on_conflict` plus `updated_at` instead. Runs as one statement, so
/// concurrent callers never see a unique violation. The returned row carries an extra
/// [`INSERTED_COLUMN`] telling the two outcomes apart.
pub fn upsert(
    table: &str,
    values: Assignments,
    conflict: &str,
    on_conflict: Assignments,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    let mut sets = Vec::with_capacity(on_conflict.len() + 1);
    for (col, val) in on_conflict {
        let n = q.push_param(val);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {} \
         RETURNING *, (xmax = 0) AS {}",
        quoted(table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(conflict),
        sets.join(", "),
        quoted(INSERTED_COLUMN)
    );
    q
}

/// DELETE by a unique column.
pub fn delete(table: &str, key: (&str, SqlParam)) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(key.1);
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(table), quoted(key.0), n);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn text(s: &str) -> SqlParam {
        SqlParam::Text(Some(s.to_string()))
    }

    #[test]
    fn list_without_filters_is_unbounded() {
        let q = select_list("articles", &[], "created_at DESC", Page::default());
        assert_eq!(q.sql, r#"SELECT * FROM "articles" ORDER BY created_at DESC"#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn list_numbers_placeholders_in_order() {
        let q = select_list(
            "jobs",
            &[Predicate::Eq("status", text("open")), Predicate::Eq("type", text("full-time"))],
            "posted_at DESC",
            Page::new(Some(5), Some(10)),
        );
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "jobs" WHERE "status" = $1 AND "type" = $2 ORDER BY posted_at DESC LIMIT $3 OFFSET $4"#
        );
        assert_eq!(q.params.len(), 4);
        assert_eq!(q.params[2], SqlParam::BigInt(Some(5)));
        assert_eq!(q.params[3], SqlParam::BigInt(Some(10)));
    }

    #[test]
    fn zero_page_values_are_ignored_and_limit_is_clamped() {
        let q = select_list("jobs", &[], "posted_at DESC", Page::new(Some(0), Some(0)));
        assert!(!q.sql.contains("LIMIT"));
        assert!(!q.sql.contains("OFFSET"));

        let q = select_list("jobs", &[], "posted_at DESC", Page::new(Some(50_000), None));
        assert_eq!(q.params, vec![SqlParam::BigInt(Some(MAX_LIMIT))]);
    }

    #[test]
    fn not_expired_predicate_takes_no_param() {
        let q = select_list(
            "jobs",
            &[Predicate::Eq("status", text("open")), Predicate::NotExpired("expires_at")],
            "posted_at DESC",
            Page::new(Some(10), None),
        );
        assert_eq!(
            q.sql,
            r#"SELECT * FROM "jobs" WHERE "status" = $1 AND ("expires_at" IS NULL OR "expires_at" > NOW()) ORDER BY posted_at DESC LIMIT $2"#
        );
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn count_uses_predicates_only() {
        let q = count("contact_submissions", &[Predicate::Eq("status", text("pending"))]);
        assert_eq!(q.sql, r#"SELECT COUNT(*) FROM "contact_submissions" WHERE "status" = $1"#);
        assert_eq!(q.params, vec![text("pending")]);
    }

    #[test]
    fn insert_lists_supplied_columns() {
        let q = insert("categories", vec![("name", text("Berita")), ("slug", text("berita"))]);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "categories" ("name", "slug") VALUES ($1, $2) RETURNING *"#
        );
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn empty_update_is_a_select_by_key() {
        let id = Uuid::new_v4();
        let q = update("articles", ("id", SqlParam::Uuid(Some(id))), vec![]);
        assert_eq!(q.sql, r#"SELECT * FROM "articles" WHERE "id" = $1"#);
        assert_eq!(q.params, vec![SqlParam::Uuid(Some(id))]);
    }

    #[test]
    fn update_sets_fields_then_touches_updated_at() {
        let id = Uuid::new_v4();
        let q = update(
            "articles",
            ("id", SqlParam::Uuid(Some(id))),
            vec![("status", text("published")), ("excerpt", SqlParam::Text(None))],
        );
        assert_eq!(
            q.sql,
            r#"UPDATE "articles" SET "status" = $1, "excerpt" = $2, "updated_at" = NOW() WHERE "id" = $3 RETURNING *"#
        );
        assert_eq!(q.params[1], SqlParam::Text(None));
        assert_eq!(q.params[2], SqlParam::Uuid(Some(id)));
    }

    #[test]
    fn upsert_updates_on_conflict_in_one_statement() {
        let q = upsert(
            "newsletter_subscriptions",
            vec![("email", text("a@b.c")), ("name", text("Ana"))],
            "email",
            vec![("status", text("active"))],
        );
        assert_eq!(
            q.sql,
            r#"INSERT INTO "newsletter_subscriptions" ("email", "name") VALUES ($1, $2) ON CONFLICT ("email") DO UPDATE SET "status" = $3, "updated_at" = NOW() RETURNING *, (xmax = 0) AS "inserted""#
        );
        assert_eq!(q.params, vec![text("a@b.c"), text("Ana"), text("active")]);
    }

    #[test]
    fn delete_by_key() {
        let q = delete("settings", ("key", text("site_name")));
        assert_eq!(q.sql, r#"DELETE FROM "settings" WHERE "key" = $1"#);
    }
}
