//! News articles, optionally filed under a category.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource, Slugged};
use crate::model::status::ArticleStatus;
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    #[sqlx(try_from = "String")]
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArticleFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for ArticleFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new()
            .opt("status", &self.status)
            .opt("category_id", &self.category_id)
            .into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Insert for NewArticle {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("title", &self.title)
            .value("slug", &self.slug)
            .opt("excerpt", &self.excerpt)
            .value("content", &self.content)
            .opt("featured_image", &self.featured_image)
            .opt("category_id", &self.category_id)
            .opt("author_id", &self.author_id)
            .opt("status", &self.status)
            .opt("published_at", &self.published_at)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub featured_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub author_id: Option<Option<Uuid>>,
    pub status: Option<ArticleStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl Changeset for ArticlePatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("title", &self.title)
            .opt("slug", &self.slug)
            .nullable("excerpt", &self.excerpt)
            .opt("content", &self.content)
            .nullable("featured_image", &self.featured_image)
            .nullable("category_id", &self.category_id)
            .nullable("author_id", &self.author_id)
            .opt("status", &self.status)
            .nullable("published_at", &self.published_at)
            .into_assignments()
    }
}

impl Resource for Article {
    const TABLE: &'static str = "articles";
    const ORDER_BY: &'static str = "published_at DESC NULLS LAST, created_at DESC";
    const NOUN: Noun = Noun {
        singular: "article",
        plural: "articles",
        label: "Article",
    };

    type Filter = ArticleFilter;
    type New = NewArticle;
    type Patch = ArticlePatch;
}

impl Slugged for Article {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::from_query;
    use crate::sql::SqlParam;

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let body = serde_json::json!({"status": "published", "excerpt": null});
        let patch: ArticlePatch = serde_json::from_value(body).unwrap();
        assert_eq!(
            patch.changes(),
            vec![
                ("excerpt", SqlParam::Text(None)),
                ("status", SqlParam::Text(Some("published".into()))),
            ]
        );
    }

    #[test]
    fn empty_patch_has_no_changes() {
        let patch: ArticlePatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(patch.changes().is_empty());
    }

    #[test]
    fn insert_skips_absent_optionals() {
        let new: NewArticle = serde_json::from_value(serde_json::json!({
            "title": "A", "slug": "a", "content": "c", "status": "draft"
        }))
        .unwrap();
        let cols: Vec<&str> = new.assignments().into_iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["title", "slug", "content", "status"]);
    }

    #[test]
    fn filter_from_query_string() {
        let id = Uuid::new_v4();
        let filter: ArticleFilter =
            from_query(&format!("status=published&category_id={}&limit=5", id));
        assert_eq!(
            filter.predicates(),
            vec![
                Predicate::Eq("status", SqlParam::Text(Some("published".into()))),
                Predicate::Eq("category_id", SqlParam::Uuid(Some(id))),
            ]
        );
        assert_eq!(filter.page(), Page::new(Some(5), None));
    }

    #[test]
    fn empty_filter_values_impose_no_constraint() {
        let filter: ArticleFilter = from_query("status=&category_id=&limit=&offset=");
        assert!(filter.predicates().is_empty());
        assert_eq!(filter.page(), Page::default());
    }
}
