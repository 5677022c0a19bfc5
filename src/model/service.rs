//! Services the company offers, shown in a fixed display order.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource, Slugged};
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServiceFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for ServiceFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new().opt("featured", &self.featured).into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewService {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub order_index: Option<i32>,
}

impl Insert for NewService {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("title", &self.title)
            .value("slug", &self.slug)
            .opt("description", &self.description)
            .value("content", &self.content)
            .opt("icon", &self.icon)
            .opt("image", &self.image)
            .opt("featured", &self.featured)
            .opt("order_index", &self.order_index)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub featured: Option<bool>,
    pub order_index: Option<i32>,
}

impl Changeset for ServicePatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("title", &self.title)
            .opt("slug", &self.slug)
            .nullable("description", &self.description)
            .opt("content", &self.content)
            .nullable("icon", &self.icon)
            .nullable("image", &self.image)
            .opt("featured", &self.featured)
            .opt("order_index", &self.order_index)
            .into_assignments()
    }
}

impl Resource for Service {
    const TABLE: &'static str = "services";
    const ORDER_BY: &'static str = "order_index ASC, created_at DESC";
    const NOUN: Noun = Noun {
        singular: "service",
        plural: "services",
        label: "Service",
    };

    type Filter = ServiceFilter;
    type New = NewService;
    type Patch = ServicePatch;
}

impl Slugged for Service {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SqlParam;

    #[test]
    fn false_and_zero_are_present_values() {
        let body = serde_json::json!({"featured": false, "order_index": 0});
        let patch: ServicePatch = serde_json::from_value(body).unwrap();
        assert_eq!(
            patch.changes(),
            vec![
                ("featured", SqlParam::Bool(Some(false))),
                ("order_index", SqlParam::Int(Some(0))),
            ]
        );
    }
}
