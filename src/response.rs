//! Standard response envelope: `{status, data?, message?, error?}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            status: Outcome::Success,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn error(error: impl Into<String>) -> Self {
        Envelope {
            status: Outcome::Error,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

/// 200 with data.
pub fn ok<T: Serialize>(data: T) -> Reply<T> {
    (StatusCode::OK, Json(Envelope::success(data)))
}

/// 200 with data and a message (updates).
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Reply<T> {
    (StatusCode::OK, Json(Envelope::success(data).with_message(message)))
}

/// 201 with data and a message (creates).
pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Reply<T> {
    (StatusCode::CREATED, Json(Envelope::success(data).with_message(message)))
}

/// 200 with a message only (deletes).
pub fn message(message: impl Into<String>) -> Reply<()> {
    (
        StatusCode::OK,
        Json(Envelope {
            status: Outcome::Success,
            data: None,
            message: Some(message.into()),
            error: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_error_fields() {
        let (code, Json(body)) = ok(vec![1, 2]);
        assert_eq!(code, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "success", "data": [1, 2]})
        );
    }

    #[test]
    fn created_carries_message() {
        let (code, Json(body)) = created(json!({"slug": "a"}), "Article created successfully");
        assert_eq!(code, StatusCode::CREATED);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "status": "success",
                "data": {"slug": "a"},
                "message": "Article created successfully"
            })
        );
    }

    #[test]
    fn delete_reply_has_no_data() {
        let (_, Json(body)) = message("Job deleted successfully");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "success", "message": "Job deleted successfully"})
        );
    }

    #[test]
    fn error_envelope() {
        let body = Envelope::<()>::error("Article not found");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "error", "error": "Article not found"})
        );
    }
}
