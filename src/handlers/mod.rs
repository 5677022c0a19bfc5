//! HTTP handlers. `resource` holds the generic CRUD set; the other modules
//! add the lookups specific to one resource.

pub mod applications;
pub mod articles;
pub mod contact;
pub mod jobs;
pub mod newsletter;
pub mod projects;
pub mod resource;
pub mod settings;
pub mod showcase;

use serde::Deserialize;

/// `?limit=&offset=` for listings that carry their own default page size.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default, deserialize_with = "crate::model::empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "crate::model::empty_as_none")]
    pub offset: Option<i64>,
}

impl LimitQuery {
    /// The requested limit, or `default` when absent or not positive.
    pub fn limit_or(&self, default: i64) -> Option<i64> {
        Some(self.limit.filter(|l| *l > 0).unwrap_or(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_applies_when_absent_or_zero() {
        assert_eq!(LimitQuery::default().limit_or(3), Some(3));
        let zero = LimitQuery { limit: Some(0), offset: None };
        assert_eq!(zero.limit_or(10), Some(10));
        let given = LimitQuery { limit: Some(25), offset: None };
        assert_eq!(given.limit_or(10), Some(25));
    }

    #[test]
    fn empty_limit_falls_back_to_default() {
        let q: LimitQuery = crate::model::from_query("limit=&offset=");
        assert_eq!(q.limit_or(3), Some(3));
        assert_eq!(q.offset, None);
    }
}
