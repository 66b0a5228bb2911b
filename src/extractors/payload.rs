//! JSON body extractor whose rejection is the failure envelope instead of plain text.

use crate::error::Failure;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

/// Any well-formed JSON body. Shape checks are left to the handler.
#[derive(Clone, Debug)]
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(rejection) => Err(Failure::new(rejection.status(), "Invalid JSON body").with_error(rejection.body_text())),
        }
    }
}
