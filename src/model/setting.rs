//! Site-wide key/value settings.

use super::{double_option, Changeset, Insert, Noun, PageFilter, Resource};
use crate::error::AppError;
use crate::sql::{Assignments, Fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Setting {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    /// All settings as a `key -> value` map.
    pub async fn as_map(pool: &PgPool) -> Result<BTreeMap<String, String>, AppError> {
        let sql = format!("SELECT key, value FROM {}", Self::TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(String, String)> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().collect())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSetting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

impl Insert for NewSetting {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("key", &self.key)
            .value("value", &self.value)
            .opt("description", &self.description)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingPatch {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl Changeset for SettingPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("key", &self.key)
            .opt("value", &self.value)
            .nullable("description", &self.description)
            .into_assignments()
    }
}

/// Body of `PUT /settings/key/:key`.
#[derive(Clone, Debug, Deserialize)]
pub struct SettingValue {
    pub value: String,
}

impl Resource for Setting {
    const TABLE: &'static str = "settings";
    const ORDER_BY: &'static str = "key ASC";
    const NOUN: Noun = Noun {
        singular: "setting",
        plural: "settings",
        label: "Setting",
    };

    type Filter = PageFilter;
    type New = NewSetting;
    type Patch = SettingPatch;
}
