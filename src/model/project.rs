//! Mining projects, with an optional photo gallery.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource, Slugged};
use crate::model::status::ProjectStatus;
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub location: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub gallery: Option<Value>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for ProjectFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new()
            .opt("status", &self.status)
            .opt("category", &self.category)
            .opt("featured", &self.featured)
            .into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub location: Option<String>,
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub gallery: Option<Value>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub featured: Option<bool>,
}

impl Insert for NewProject {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("title", &self.title)
            .value("slug", &self.slug)
            .opt("description", &self.description)
            .value("content", &self.content)
            .opt("location", &self.location)
            .opt("status", &self.status)
            .opt("category", &self.category)
            .opt("featured_image", &self.featured_image)
            .opt("gallery", &self.gallery)
            .opt("start_date", &self.start_date)
            .opt("end_date", &self.end_date)
            .opt("client", &self.client)
            .opt("featured", &self.featured)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub featured_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub gallery: Option<Option<Value>>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl Changeset for ProjectPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("title", &self.title)
            .opt("slug", &self.slug)
            .nullable("description", &self.description)
            .opt("content", &self.content)
            .nullable("location", &self.location)
            .opt("status", &self.status)
            .nullable("category", &self.category)
            .nullable("featured_image", &self.featured_image)
            .nullable("gallery", &self.gallery)
            .nullable("start_date", &self.start_date)
            .nullable("end_date", &self.end_date)
            .nullable("client", &self.client)
            .opt("featured", &self.featured)
            .into_assignments()
    }
}

impl Resource for Project {
    const TABLE: &'static str = "projects";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "project",
        plural: "projects",
        label: "Project",
    };

    type Filter = ProjectFilter;
    type New = NewProject;
    type Patch = ProjectPatch;
}

impl Slugged for Project {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SqlParam;

    #[test]
    fn gallery_binds_as_json() {
        let patch: ProjectPatch = serde_json::from_value(serde_json::json!({
            "gallery": ["/a.jpg", "/b.jpg"],
            "end_date": "2025-12-31"
        }))
        .unwrap();
        let changes = patch.changes();
        assert_eq!(
            changes[0],
            ("gallery", SqlParam::Json(Some(serde_json::json!(["/a.jpg", "/b.jpg"]))))
        );
        assert_eq!(
            changes[1],
            ("end_date", SqlParam::Date(NaiveDate::from_ymd_opt(2025, 12, 31)))
        );
    }
}
