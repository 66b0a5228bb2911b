//! Presence and type checks for record payloads.

use crate::error::AppError;
use crate::model::{NewRecord, RecordPatch};
use serde::Deserialize;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a creation payload. All four fields must be present and non-null.
    /// Unknown fields are ignored.
    pub fn new_record(body: &Value) -> Result<NewRecord, AppError> {
        require_object(body)?;
        NewRecord::deserialize(body).map_err(|e| AppError::Validation(e.to_string()))
    }

    /// Validate a bulk payload element by element; the first bad element fails the batch.
    pub fn new_records(items: &[Value]) -> Result<Vec<NewRecord>, AppError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Self::new_record(item).map_err(|e| match e {
                    AppError::Validation(msg) => AppError::Validation(format!("item {}: {}", i, msg)),
                    AppError::BadRequest(msg) => AppError::BadRequest(format!("item {}: {}", i, msg)),
                    other => other,
                })
            })
            .collect()
    }

    /// Validate a partial update (for PUT). Only the record's own fields are accepted;
    /// null values leave the field unchanged.
    pub fn patch(body: &Value) -> Result<RecordPatch, AppError> {
        require_object(body)?;
        RecordPatch::deserialize(body).map_err(|e| AppError::Validation(e.to_string()))
    }
}

/// Serde would also accept a positional array for a struct; payloads must be objects.
fn require_object(body: &Value) -> Result<(), AppError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(AppError::BadRequest("expected a JSON object".into()))
    }
}
