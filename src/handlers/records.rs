//! Record handlers: each maps one operation onto the service and picks its status and message.

use crate::docs::{RecordEnvelope, RecordListEnvelope, StatusEnvelope};
use crate::error::{Failure, ResultExt};
use crate::extractors::JsonPayload;
use crate::model::{NewRecord, RecordPatch};
use crate::response::{success_created, success_message, success_ok};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/api/hot",
    tag = "hot",
    request_body = NewRecord,
    responses(
        (status = 201, description = "HotWheels created", body = RecordEnvelope),
        (status = 400, description = "Missing or mistyped field", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<impl IntoResponse, Failure> {
    let record = RecordService::create(state.store.as_ref(), &body)
        .await
        .or_fail("Error creating HotWheels")?;
    Ok(success_created("HotWheels created successfully!", record))
}

#[utoipa::path(
    post,
    path = "/api/hot/multiple",
    tag = "hot",
    request_body = Vec<NewRecord>,
    responses(
        (status = 201, description = "HotWheels created", body = RecordListEnvelope),
        (status = 400, description = "Body is not a non-empty array, or an element is invalid", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn create_many(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<impl IntoResponse, Failure> {
    let items = match body {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            return Err(Failure::new(
                StatusCode::BAD_REQUEST,
                "You must send an array of HotWheels to create",
            ))
        }
    };
    let records = RecordService::create_many(state.store.as_ref(), &items)
        .await
        .or_fail("Error creating HotWheels")?;
    let message = format!("{} HotWheels created successfully!", records.len());
    Ok(success_created(message, records))
}

#[utoipa::path(
    get,
    path = "/api/hot",
    tag = "hot",
    responses(
        (status = 200, description = "Every HotWheels, possibly none", body = RecordListEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, Failure> {
    let records = RecordService::list(state.store.as_ref())
        .await
        .or_fail("Error listing HotWheels")?;
    let message = if records.is_empty() {
        "No HotWheels found"
    } else {
        "HotWheels found successfully!"
    };
    Ok(success_ok(message, records))
}

#[utoipa::path(
    get,
    path = "/api/hot/{id}",
    tag = "hot",
    params(("id" = String, Path, description = "24-character HotWheels ID")),
    responses(
        (status = 200, description = "HotWheels found", body = RecordEnvelope),
        (status = 404, description = "Invalid ID or HotWheels not found", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Failure> {
    let record = RecordService::find(state.store.as_ref(), &id)
        .await
        .or_fail("Error fetching HotWheels by ID")?;
    Ok(success_ok("HotWheels found successfully!", record))
}

#[utoipa::path(
    put,
    path = "/api/hot/{id}",
    tag = "hot",
    params(("id" = String, Path, description = "24-character HotWheels ID")),
    request_body = RecordPatch,
    responses(
        (status = 200, description = "HotWheels updated", body = RecordEnvelope),
        (status = 400, description = "Unknown or mistyped field", body = StatusEnvelope),
        (status = 404, description = "Invalid ID or HotWheels not found", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(body): JsonPayload,
) -> Result<impl IntoResponse, Failure> {
    let record = RecordService::update(state.store.as_ref(), &id, &body)
        .await
        .or_fail("Error updating HotWheels")?;
    Ok(success_ok("HotWheels updated successfully!", record))
}

#[utoipa::path(
    delete,
    path = "/api/hot/{id}",
    tag = "hot",
    params(("id" = String, Path, description = "24-character HotWheels ID")),
    responses(
        (status = 200, description = "HotWheels deleted", body = StatusEnvelope),
        (status = 404, description = "Invalid ID or HotWheels not found", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Failure> {
    RecordService::delete(state.store.as_ref(), &id)
        .await
        .or_fail("Error deleting HotWheels")?;
    Ok(success_message("HotWheels deleted successfully!"))
}

#[utoipa::path(
    delete,
    path = "/api/hot/delete-all",
    tag = "hot",
    responses(
        (status = 200, description = "Every HotWheels deleted; message carries the count", body = StatusEnvelope),
        (status = 500, description = "Store failure", body = StatusEnvelope)
    )
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, Failure> {
    let count = RecordService::delete_all(state.store.as_ref())
        .await
        .or_fail("Error deleting all HotWheels")?;
    Ok(success_message(format!("{} HotWheels deleted successfully!", count)))
}

#[utoipa::path(
    get,
    path = "/api/hot/welcome",
    tag = "misc",
    responses((status = 200, description = "Static greeting"))
)]
pub async fn welcome() -> Json<Value> {
    Json(serde_json::json!({ "message": "Welcome to the HotWheels API!" }))
}
