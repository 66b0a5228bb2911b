//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown store kind: '{0}' (expected postgres or memory)")]
    UnknownStore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid ID '{0}'")]
    InvalidId(String),
    #[error("HotWheels not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store: {0}")]
    Store(String),
}

impl AppError {
    /// Invalid identifiers are folded into the not-found class.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attach the operation's human-readable message, producing the failure envelope.
    pub fn context(self, message: impl Into<String>) -> Failure {
        Failure {
            status: self.status(),
            message: message.into(),
            error: Some(self.to_string()),
        }
    }
}

/// A failed operation: status code plus the `{success: false, message, error?}` envelope.
#[derive(Debug)]
pub struct Failure {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl Failure {
    /// Failure without underlying error detail (e.g. a rejected bulk payload).
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Failure {
            status,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        tracing::error!(
            status = self.status.as_u16(),
            message = %self.message,
            error = self.error.as_deref().unwrap_or(""),
            "request failed"
        );
        let body: Envelope<()> = Envelope {
            success: false,
            message: self.message,
            data: None,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

pub trait ResultExt<T> {
    fn or_fail(self, message: &str) -> Result<T, Failure>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn or_fail(self, message: &str) -> Result<T, Failure> {
        self.map_err(|e| e.context(message))
    }
}
