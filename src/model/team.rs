//! Team members shown on the "about" page.

use super::{double_option, Changeset, Insert, Noun, PageFilter, Resource};
use crate::sql::{Assignments, Fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeamMember {
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub order_index: Option<i32>,
}

impl Insert for NewTeamMember {
    fn assignments(&self) -> Assignments {
        Fields::new()
            .value("first_name", &self.first_name)
            .value("last_name", &self.last_name)
            .opt("role", &self.role)
            .opt("bio", &self.bio)
            .opt("image", &self.image)
            .opt("linkedin", &self.linkedin)
            .opt("email", &self.email)
            .opt("order_index", &self.order_index)
            .into_assignments()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamMemberPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    pub order_index: Option<i32>,
}

impl Changeset for TeamMemberPatch {
    fn changes(&self) -> Assignments {
        Fields::new()
            .opt("first_name", &self.first_name)
            .opt("last_name", &self.last_name)
            .nullable("role", &self.role)
            .nullable("bio", &self.bio)
            .nullable("image", &self.image)
            .nullable("linkedin", &self.linkedin)
            .nullable("email", &self.email)
            .opt("order_index", &self.order_index)
            .into_assignments()
    }
}

impl Resource for TeamMember {
    const TABLE: &'static str = "team_members";
    const ORDER_BY: &'static str = "order_index ASC, created_at DESC";
    const NOUN: Noun = Noun {
        singular: "team member",
        plural: "team members",
        label: "Team member",
    };

    type Filter = PageFilter;
    type New = NewTeamMember;
    type Patch = TeamMemberPatch;
}
