//! Lifecycle status enums. Stored as text, snake_case on the wire and in the table.
//!
//! Each enum has an explicit transition table. The tables are fully permissive:
//! every state may move to any state, including back to where it started.

use crate::sql::{SqlParam, ToParam};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} status '{value}'")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// States reachable from `self`.
            pub fn transitions(self) -> &'static [$name] {
                Self::ALL
            }

            pub fn can_transition_to(self, next: $name) -> bool {
                self.transitions().contains(&next)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownStatus {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownStatus;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl ToParam for $name {
            fn to_param(&self) -> SqlParam {
                SqlParam::Text(Some(self.as_str().to_string()))
            }

            fn null_param() -> SqlParam {
                SqlParam::Text(None)
            }
        }
    };
}

status_enum! {
    ArticleStatus ("article") {
        Draft => "draft",
        Published => "published",
        Archived => "archived",
    }
    default = Draft
}

status_enum! {
    ProjectStatus ("project") {
        Planned => "planned",
        Ongoing => "ongoing",
        Completed => "completed",
    }
    default = Ongoing
}

status_enum! {
    JobStatus ("job") {
        Draft => "draft",
        Open => "open",
        Closed => "closed",
    }
    default = Open
}

status_enum! {
    /// Contact form submission handling state.
    SubmissionStatus ("submission") {
        Pending => "pending",
        Read => "read",
        Replied => "replied",
        Archived => "archived",
    }
    default = Pending
}

status_enum! {
    ApplicationStatus ("application") {
        Pending => "pending",
        Reviewed => "reviewed",
        Shortlisted => "shortlisted",
        Rejected => "rejected",
        Hired => "hired",
    }
    default = Pending
}

status_enum! {
    SubscriptionStatus ("subscription") {
        Active => "active",
        Unsubscribed => "unsubscribed",
    }
    default = Active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_text() {
        assert_eq!("published".parse::<ArticleStatus>(), Ok(ArticleStatus::Published));
        assert_eq!(
            SubscriptionStatus::try_from("unsubscribed".to_string()),
            Ok(SubscriptionStatus::Unsubscribed)
        );
    }

    #[test]
    fn rejects_unknown_text() {
        let err = "paused".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown job status 'paused'");
    }

    #[test]
    fn wire_format_matches_store_text() {
        for s in ApplicationStatus::ALL {
            let json = serde_json::to_value(s).unwrap();
            assert_eq!(json, serde_json::Value::String(s.as_str().to_string()));
        }
    }

    #[test]
    fn transitions_are_unrestricted() {
        assert!(ProjectStatus::Completed.can_transition_to(ProjectStatus::Planned));
        assert!(SubmissionStatus::Archived.can_transition_to(SubmissionStatus::Pending));
        assert!(ArticleStatus::Draft.can_transition_to(ArticleStatus::Draft));
    }

    #[test]
    fn binds_as_text() {
        assert_eq!(
            JobStatus::Open.to_param(),
            SqlParam::Text(Some("open".to_string()))
        );
    }
}
