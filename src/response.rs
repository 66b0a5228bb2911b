//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Uniform body of every record operation: `{success, message, data?, error?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }),
    )
}

pub fn success_ok<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::OK, message, data)
}

pub fn success_created<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::CREATED, message, data)
}

/// Success envelope with no `data` field.
pub fn success_message(message: impl Into<String>) -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }),
    )
}
