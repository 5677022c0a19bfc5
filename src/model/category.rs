//! Article categories.

use super::{double_option, Changeset, Insert, Noun, PageFilter, Resource, Slugged};
use crate::sql::{Assignments, Fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl Insert for NewCategory {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("name", &self.name)
            .value("slug", &self.slug)
            .opt("description", &self.description)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl Changeset for CategoryPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("name", &self.name)
            .opt("slug", &self.slug)
            .nullable("description", &self.description)
            .into_assignments()
    }
}

impl Resource for Category {
    const TABLE: &'static str = "categories";
    const ORDER_BY: &'static str = "name ASC";
    const NOUN: Noun = Noun {
        singular: "category",
        plural: "categories",
        label: "Category",
    };

    type Filter = PageFilter;
    type New = NewCategory;
    type Patch = CategoryPatch;
}

impl Slugged for Category {}
