//! Newsletter subscriptions, one per email address.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource};
use crate::error::AppError;
use crate::model::status::SubscriptionStatus;
use crate::service::CrudService;
use crate::sql::{Assignments, Fields, Page, Predicate, ToParam};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsletterSubscription {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, AppError> {
        CrudService::find_by::<Self>(pool, "email", email.to_param()).await
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewsletterSubscriptionFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for NewsletterSubscriptionFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new().opt("status", &self.status).into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

/// Subscribe request. `email` is checked by the handler so a missing one is a 400.
#[derive(Clone, Debug, Deserialize)]
pub struct NewNewsletterSubscription {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
    pub status: Option<SubscriptionStatus>,
}

impl Insert for NewNewsletterSubscription {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("email", &self.email)
            .opt("name", &self.name)
            .opt("status", &self.status)
            .into_assignments()
    }
}

impl NewNewsletterSubscription {
    pub const EMAIL_REQUIRED: &'static str = "Email is required";

    /// Assignments that bring an existing subscription for the same email back to active.
    pub fn reactivation(&self) -> Assignments {
        Fields::new()
            .value("status", &SubscriptionStatus::Active)
            .opt("name", &self.name)
            .into_assignments()
    }
}

/// Body of `POST /newsletter/unsubscribe`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmailBody {
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewsletterSubscriptionPatch {
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    pub status: Option<SubscriptionStatus>,
}

impl Changeset for NewsletterSubscriptionPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("email", &self.email)
            .nullable("name", &self.name)
            .opt("status", &self.status)
            .into_assignments()
    }
}

impl Resource for NewsletterSubscription {
    const TABLE: &'static str = "newsletter_subscriptions";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "newsletter subscription",
        plural: "newsletter subscriptions",
        label: "Newsletter subscription",
    };

    type Filter = NewsletterSubscriptionFilter;
    type New = NewNewsletterSubscription;
    type Patch = NewsletterSubscriptionPatch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SqlParam;

    #[test]
    fn missing_email_deserializes_empty() {
        let body: NewNewsletterSubscription = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert!(body.email.is_empty());
    }

    #[test]
    fn reactivation_ignores_requested_status() {
        let body: NewNewsletterSubscription =
            serde_json::from_str(r#"{"email":"a@b.c","status":"unsubscribed"}"#).unwrap();
        assert_eq!(
            body.reactivation(),
            vec![("status", SqlParam::Text(Some("active".into())))]
        );
    }
}
