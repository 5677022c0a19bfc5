//! Typed bind values for the positional `$n` parameters of built statements.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};
use uuid::Uuid;

/// A value bound to a PostgreSQL statement. Each variant knows its Postgres type,
/// so NULLs are typed as well (a NULL uuid is still sent as `uuid`).
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Text(Option<String>),
    Uuid(Option<Uuid>),
    Bool(Option<bool>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Timestamp(Option<DateTime<Utc>>),
    Date(Option<NaiveDate>),
    Json(Option<Value>),
}

impl SqlParam {
    pub fn is_null(&self) -> bool {
        match self {
            SqlParam::Text(v) => v.is_none(),
            SqlParam::Uuid(v) => v.is_none(),
            SqlParam::Bool(v) => v.is_none(),
            SqlParam::Int(v) => v.is_none(),
            SqlParam::BigInt(v) => v.is_none(),
            SqlParam::Timestamp(v) => v.is_none(),
            SqlParam::Date(v) => v.is_none(),
            SqlParam::Json(v) => v.is_none(),
        }
    }
}

/// Conversion of a field value into a bind parameter.
pub trait ToParam {
    fn to_param(&self) -> SqlParam;
    /// NULL of the same Postgres type.
    fn null_param() -> SqlParam;
}

macro_rules! to_param {
    ($ty:ty, $variant:ident) => {
        impl ToParam for $ty {
            fn to_param(&self) -> SqlParam {
                SqlParam::$variant(Some(self.clone()))
            }

            fn null_param() -> SqlParam {
                SqlParam::$variant(None)
            }
        }
    };
}

to_param!(String, Text);
to_param!(Uuid, Uuid);
to_param!(bool, Bool);
to_param!(i32, Int);
to_param!(i64, BigInt);
to_param!(DateTime<Utc>, Timestamp);
to_param!(NaiveDate, Date);
to_param!(Value, Json);

impl ToParam for &str {
    fn to_param(&self) -> SqlParam {
        SqlParam::Text(Some((*self).to_string()))
    }

    fn null_param() -> SqlParam {
        SqlParam::Text(None)
    }
}

impl<'q> Encode<'q, Postgres> for SqlParam {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqlParam::Text(v) => <Option<String> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::Uuid(v) => <Option<Uuid> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::Bool(v) => <Option<bool> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::Int(v) => <Option<i32> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::BigInt(v) => <Option<i64> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::Timestamp(v) => {
                <Option<DateTime<Utc>> as Encode<Postgres>>::encode_by_ref(v, buf)
            }
            SqlParam::Date(v) => <Option<NaiveDate> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlParam::Json(v) => <Option<Value> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            SqlParam::Text(_) => <String as Type<Postgres>>::type_info(),
            SqlParam::Uuid(_) => <Uuid as Type<Postgres>>::type_info(),
            SqlParam::Bool(_) => <bool as Type<Postgres>>::type_info(),
            SqlParam::Int(_) => <i32 as Type<Postgres>>::type_info(),
            SqlParam::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
            SqlParam::Timestamp(_) => <DateTime<Utc> as Type<Postgres>>::type_info(),
            SqlParam::Date(_) => <NaiveDate as Type<Postgres>>::type_info(),
            SqlParam::Json(_) => <Value as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for SqlParam {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_keep_their_type() {
        assert_eq!(<Uuid as ToParam>::null_param(), SqlParam::Uuid(None));
        assert!(<bool as ToParam>::null_param().is_null());
        assert_eq!(
            <Uuid as ToParam>::null_param().produces(),
            Some(<Uuid as Type<Postgres>>::type_info())
        );
    }

    #[test]
    fn values_are_wrapped() {
        assert_eq!("a".to_param(), SqlParam::Text(Some("a".into())));
        assert_eq!(false.to_param(), SqlParam::Bool(Some(false)));
        assert!(!0i32.to_param().is_null());
    }
}
