//! Applications submitted against a job opening.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource};
use crate::model::status::ApplicationStatus;
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct JobApplicationFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub job_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for JobApplicationFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new()
            .opt("job_id", &self.job_id)
            .opt("status", &self.status)
            .into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewJobApplication {
    pub job_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: Option<ApplicationStatus>,
}

impl Insert for NewJobApplication {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("job_id", &self.job_id)
            .value("first_name", &self.first_name)
            .value("last_name", &self.last_name)
            .value("email", &self.email)
            .opt("phone", &self.phone)
            .opt("resume_url", &self.resume_url)
            .opt("cover_letter", &self.cover_letter)
            .opt("status", &self.status)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct JobApplicationPatch {
    pub job_id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub resume_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_letter: Option<Option<String>>,
    pub status: Option<ApplicationStatus>,
}

impl Changeset for JobApplicationPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("job_id", &self.job_id)
            .opt("first_name", &self.first_name)
            .opt("last_name", &self.last_name)
            .opt("email", &self.email)
            .nullable("phone", &self.phone)
            .nullable("resume_url", &self.resume_url)
            .nullable("cover_letter", &self.cover_letter)
            .opt("status", &self.status)
            .into_assignments()
    }
}

impl Resource for JobApplication {
    const TABLE: &'static str = "job_applications";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "job application",
        plural: "job applications",
        label: "Job application",
    };

    type Filter = JobApplicationFilter;
    type New = NewJobApplication;
    type Patch = JobApplicationPatch;
}
