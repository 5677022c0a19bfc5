//! Typed errors and HTTP mapping.

use crate::model::UnknownStatus;
use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message sent for store faults that were not given an operation-specific context.
pub const GENERIC_FAULT: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    /// Required input missing or invalid; never reaches the store.
    #[error("{0}")]
    Validation(String),
    /// Malformed JSON body, query string or path.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Store fault with the fixed client-facing message for the operation.
    #[error("{message}")]
    Fault {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Attach the client-facing message to a store fault. Other variants pass through.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Db(source) => AppError::Fault {
                message: message.into(),
                source,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Fault { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the envelope's `error` field. Store causes are never exposed.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(m) | AppError::BadRequest(m) | AppError::NotFound(m) => m.clone(),
            AppError::Fault { message, .. } => message.clone(),
            AppError::Db(_) => GENERIC_FAULT.to_string(),
        }
    }
}

impl From<UnknownStatus> for AppError {
    fn from(e: UnknownStatus) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Shorthand for handlers: map a store error to a fault with the given message.
pub trait ResultExt<T> {
    fn or_fault(self, message: impl Into<String>) -> Result<T, AppError>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn or_fault(self, message: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| e.into().context(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Fault { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Db(source) => {
                tracing::error!(error = %source, "unhandled database error");
            }
            _ => {}
        }
        let body = Envelope::<()>::error(self.client_message());
        (self.status_code(), Json(body)).into_response()
    }
}
