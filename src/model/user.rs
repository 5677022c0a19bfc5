//! Back-office users. The password hash is accepted on write and never serialized.

use super::{double_option, empty_as_none, Changeset, Insert, ListFilter, Noun, Resource};
use crate::error::AppError;
use crate::service::CrudService;
use crate::sql::{Assignments, Fields, Page, Predicate, ToParam};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, AppError> {
        CrudService::find_by::<Self>(pool, "email", email.to_param()).await
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

impl ListFilter for UserFilter {
    fn predicates(&self) -> Vec<Predicate> {
        Fields::new().opt("role", &self.role).into_predicates()
    }

    fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

impl Insert for NewUser {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("email", &self.email)
            .value("password_hash", &self.password_hash)
            .opt("first_name", &self.first_name)
            .opt("last_name", &self.last_name)
            .opt("role", &self.role)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_name: Option<Option<String>>,
    pub role: Option<String>,
}

impl Changeset for UserPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("email", &self.email)
            .opt("password_hash", &self.password_hash)
            .nullable("first_name", &self.first_name)
            .nullable("last_name", &self.last_name)
            .opt("role", &self.role)
            .into_assignments()
    }
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const ORDER_BY: &'static str = "created_at DESC";
    const NOUN: Noun = Noun {
        singular: "user",
        plural: "users",
        label: "User",
    };

    type Filter = UserFilter;
    type New = NewUser;
    type Patch = UserPatch;
}
