//! Client testimonials.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource};
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub image: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TestimonialFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for TestimonialFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new().opt("featured", &self.featured).into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTestimonial {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
}

impl Insert for NewTestimonial {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("name", &self.name)
            .opt("role", &self.role)
            .opt("company", &self.company)
            .value("content", &self.content)
            .opt("rating", &self.rating)
            .opt("image", &self.image)
            .opt("featured", &self.featured)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub company: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl Changeset for TestimonialPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("name", &self.name)
            .nullable("role", &self.role)
            .nullable("company", &self.company)
            .opt("content", &self.content)
            .nullable("rating", &self.rating)
            .nullable("image", &self.image)
            .opt("featured", &self.featured)
            .into_assignments()
    }
}

impl Resource for Testimonial {
    const TABLE: &'static str = "testimonials";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "testimonial",
        plural: "testimonials",
        label: "Testimonial",
    };

    type Filter = TestimonialFilter;
    type New = NewTestimonial;
    type Patch = TestimonialPatch;
}
