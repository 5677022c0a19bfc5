//! Resource records, their list filters, create inputs and patches.
//!
//! Every resource is a flat table row with a UUID `id` and `created_at`/`updated_at`.
//! A resource ties the row type to its table, ordering and the typed input structs;
//! the generic CRUD service and handlers work over this trait.

pub mod application;
pub mod article;
pub mod category;
pub mod contact;
pub mod job;
pub mod newsletter;
pub mod project;
pub mod service;
pub mod setting;
pub mod status;
pub mod team;
pub mod testimonial;
pub mod user;

pub use application::{
    JobApplication, JobApplicationFilter, JobApplicationPatch, NewJobApplication,
};
pub use article::{Article, ArticleFilter, ArticlePatch, NewArticle};
pub use category::{Category, CategoryPatch, NewCategory};
pub use contact::{
    ContactForm, ContactSubmission, ContactSubmissionFilter, ContactSubmissionPatch,
    NewContactSubmission,
};
pub use job::{Job, JobFilter, JobPatch, NewJob};
pub use newsletter::{
    EmailBody, NewNewsletterSubscription, NewsletterSubscription, NewsletterSubscriptionFilter,
    NewsletterSubscriptionPatch,
};
pub use project::{NewProject, Project, ProjectFilter, ProjectPatch};
pub use service::{NewService, Service, ServiceFilter, ServicePatch};
pub use setting::{NewSetting, Setting, SettingPatch, SettingValue};
pub use status::{
    ApplicationStatus, ArticleStatus, JobStatus, ProjectStatus, SubmissionStatus,
    SubscriptionStatus, UnknownStatus,
};
pub use team::{NewTeamMember, TeamMember, TeamMemberPatch};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialFilter, TestimonialPatch};
pub use user::{NewUser, User, UserFilter, UserPatch};

use crate::sql::{Assignments, Page, Predicate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::fmt::Display;
use std::str::FromStr;

/// Human-readable names used in response messages.
#[derive(Clone, Copy, Debug)]
pub struct Noun {
    /// "job application"
    pub singular: &'static str,
    /// "job applications"
    pub plural: &'static str,
    /// "Job application"
    pub label: &'static str,
}

impl Noun {
    pub fn not_found(&self) -> String {
        format!("{} not found", self.label)
    }
}

/// Equality filters plus paging for a list query.
pub trait ListFilter {
    fn predicates(&self) -> Vec<Predicate>;

    fn page(&self) -> Page {
        Page::default()
    }
}

/// Column values for an INSERT. Absent optional fields are left to column defaults.
pub trait Insert {
    fn assignments(&self) -> Assignments;
}

/// Sparse column assignments for an UPDATE. Absent fields are left unchanged.
pub trait Changeset {
    fn changes(&self) -> Assignments;
}

pub trait Resource: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    /// ORDER BY expression for list queries.
    const ORDER_BY: &'static str;
    const NOUN: Noun;

    type Filter: ListFilter + DeserializeOwned + Default + Send + Sync + 'static;
    type New: Insert + DeserializeOwned + Send + Sync + 'static;
    type Patch: Changeset + DeserializeOwned + Default + Send + Sync + 'static;
}

/// Resources addressable by a unique `slug` column.
pub trait Slugged: Resource {}

/// Paging only, for resources without list filters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for PageFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Vec::new()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent key (`None`).
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Query-string field where an empty value (`?status=`) means the parameter is absent.
/// Non-empty values must parse, so `?status=bogus` is still rejected.
/// Use with `#[serde(default, deserialize_with = "empty_as_none")]`.
pub(crate) fn empty_as_none<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Decode `query` the way the query-string extractor does.
#[cfg(test)]
pub(crate) fn from_query<T: DeserializeOwned>(query: &str) -> T {
    let uri: axum::http::Uri = format!("/?{}", query).parse().unwrap();
    axum::extract::Query::<T>::try_from_uri(&uri).unwrap().0
}
