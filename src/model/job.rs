//! Job openings.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource, Slugged};
use crate::model::status::JobStatus;
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub job_type: Option<String>,
    pub department: Option<String>,
    pub salary_range: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: JobStatus,
    pub posted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct JobFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<JobStatus>,
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
    /// Exclude jobs whose `expires_at` has passed. Not settable from the query string.
    #[serde(skip)]
    pub unexpired: bool,
}

impl ListFilter for JobFilter {
    fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Fields::new()
            .opt("status", &self.status)
            .opt("type", &self.job_type)
            .opt("department", &self.department)
            .into_predicates();
        if self.unexpired {
            preds.push(Predicate::NotExpired("expires_at"));
        }
        preds
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub department: Option<String>,
    pub salary_range: Option<String>,
    pub status: Option<JobStatus>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Insert for NewJob {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("title", &self.title)
            .value("slug", &self.slug)
            .value("description", &self.description)
            .opt("requirements", &self.requirements)
            .opt("benefits", &self.benefits)
            .opt("location", &self.location)
            .opt("type", &self.job_type)
            .opt("department", &self.department)
            .opt("salary_range", &self.salary_range)
            .opt("status", &self.status)
            .opt("posted_at", &self.posted_at)
            .opt("expires_at", &self.expires_at)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub requirements: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub benefits: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(rename = "type", default, deserialize_with = "double_option")]
    pub job_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary_range: Option<Option<String>>,
    pub status: Option<JobStatus>,
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl Changeset for JobPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("title", &self.title)
            .opt("slug", &self.slug)
            .opt("description", &self.description)
            .nullable("requirements", &self.requirements)
            .nullable("benefits", &self.benefits)
            .nullable("location", &self.location)
            .nullable("type", &self.job_type)
            .nullable("department", &self.department)
            .nullable("salary_range", &self.salary_range)
            .opt("status", &self.status)
            .opt("posted_at", &self.posted_at)
            .nullable("expires_at", &self.expires_at)
            .into_assignments()
    }
}

impl Resource for Job {
    const TABLE: &'static str = "jobs";
    const ORDER_BY: &'static str = "posted_at DESC";
    const NOUN: Noun = Noun {
        singular: "job",
        plural: "jobs",
        label: "Job",
    };

    type Filter = JobFilter;
    type New = NewJob;
    type Patch = JobPatch;
}

impl Slugged for Job {}
