//! Messages sent through the website's contact form.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource};
use crate::error::AppError;
use crate::model::status::SubmissionStatus;
use crate::service::RequestValidator;
use crate::sql::{Assignments, Fields, Page, Predicate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactSubmissionFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<SubmissionStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for ContactSubmissionFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new().opt("status", &self.status).into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

/// Raw contact form body. Every field is optional here so missing ones can be
/// reported as a validation error instead of a malformed body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub const REQUIRED_MESSAGE: &'static str = "Name, email, and message are required";

    /// Requires non-empty name, email and message. Any client-supplied status is ignored.
    pub fn validate(self) -> Result<NewContactSubmission, AppError> {
        RequestValidator::require_all(
            &[&self.name, &self.email, &self.message],
            Self::REQUIRED_MESSAGE,
        )?;
        Ok(NewContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            subject: self.subject,
            message: self.message.unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl Insert for NewContactSubmission {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("name", &self.name)
            .value("email", &self.email)
            .opt("phone", &self.phone)
            .opt("subject", &self.subject)
            .value("message", &self.message)
            .value("status", &SubmissionStatus::Pending)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactSubmissionPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub subject: Option<Option<String>>,
    pub message: Option<String>,
    pub status: Option<SubmissionStatus>,
}

impl Changeset for ContactSubmissionPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("name", &self.name)
            .opt("email", &self.email)
            .nullable("phone", &self.phone)
            .nullable("subject", &self.subject)
            .opt("message", &self.message)
            .opt("status", &self.status)
            .into_assignments()
    }
}

impl Resource for ContactSubmission {
    const TABLE: &'static str = "contact_submissions";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "contact submission",
        plural: "contact submissions",
        label: "Contact submission",
    };

    type Filter = ContactSubmissionFilter;
    type New = NewContactSubmission;
    type Patch = ContactSubmissionPatch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SqlParam;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(String::from),
            email: email.map(String::from),
            message: message.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn each_required_field_is_enforced() {
        let cases = [
            form(None, Some("a@b.c"), Some("hi")),
            form(Some("Ana"), None, Some("hi")),
            form(Some("Ana"), Some("a@b.c"), None),
            form(Some(""), Some("a@b.c"), Some("hi")),
        ];
        for case in cases {
            let err = case.validate().unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == ContactForm::REQUIRED_MESSAGE)
            );
        }
    }

    #[test]
    fn new_submissions_are_pending() {
        let new = form(Some("Ana"), Some("a@b.c"), Some("hi")).validate().unwrap();
        let status = new
            .assignments()
            .into_iter()
            .find(|(c, _)| *c == "status")
            .map(|(_, v)| v);
        assert_eq!(status, Some(SqlParam::Text(Some("pending".into()))));
    }
}
