//! Collects typed struct fields into column assignments or equality predicates.

use super::builder::{Assignments, Predicate};
use super::params::ToParam;

/// Sparse field collector. Absent (`None`) fields are skipped; a present `Some(None)`
/// on a nullable field becomes a typed NULL.
#[derive(Debug, Default)]
pub struct Fields(Assignments);

impl Fields {
    pub fn new() -> Self {
        Fields(Vec::new())
    }

    /// Always include the column.
    pub fn value<T: ToParam>(mut self, column: &'static str, value: &T) -> Self {
        self.0.push((column, value.to_param()));
        self
    }

    /// Include the column only when the value is present.
    pub fn opt<T: ToParam>(mut self, column: &'static str, value: &Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push((column, v.to_param()));
        }
        self
    }

    /// Include the column when the key was present; an explicit null clears it.
    pub fn nullable<T: ToParam>(mut self, column: &'static str, value: &Option<Option<T>>) -> Self {
        match value {
            Some(Some(v)) => self.0.push((column, v.to_param())),
            Some(None) => self.0.push((column, T::null_param())),
            None => {}
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_assignments(self) -> Assignments {
        self.0
    }

    pub fn into_predicates(self) -> Vec<Predicate> {
        self.0
            .into_iter()
            .map(|(col, val)| Predicate::Eq(col, val))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SqlParam;

    #[test]
    fn absent_fields_are_skipped() {
        let title: Option<String> = None;
        let featured = Some(false);
        let fields = Fields::new().opt("title", &title).opt("featured", &featured);
        assert_eq!(
            fields.into_assignments(),
            vec![("featured", SqlParam::Bool(Some(false)))]
        );
    }

    #[test]
    fn explicit_null_is_kept_and_typed() {
        let excerpt: Option<Option<String>> = Some(None);
        let image: Option<Option<String>> = None;
        let fields = Fields::new()
            .nullable("excerpt", &excerpt)
            .nullable("featured_image", &image);
        assert_eq!(fields.into_assignments(), vec![("excerpt", SqlParam::Text(None))]);
    }

    #[test]
    fn predicates_are_equalities() {
        let status = Some("open".to_string());
        let preds = Fields::new().opt("status", &status).into_predicates();
        assert_eq!(
            preds,
            vec![Predicate::Eq("status", SqlParam::Text(Some("open".into())))]
        );
    }
}
