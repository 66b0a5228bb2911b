//! OpenAPI document for the record routes, served at `/api-docs/openapi.json`.

use crate::handlers::records;
use crate::model::{NewRecord, Record, RecordPatch};
use utoipa::{OpenApi, ToSchema};

/// Envelope carrying one record.
#[derive(ToSchema)]
pub struct RecordEnvelope {
    pub success: bool,
    pub message: String,
    pub data: Option<Record>,
    pub error: Option<String>,
}

/// Envelope carrying a list of records.
#[derive(ToSchema)]
pub struct RecordListEnvelope {
    pub success: bool,
    pub message: String,
    pub data: Option<Vec<Record>>,
    pub error: Option<String>,
}

/// Envelope without data: failures and deletions.
#[derive(ToSchema)]
pub struct StatusEnvelope {
    pub success: bool,
    pub message: String,
    /// Underlying error text, present on failures.
    pub error: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HotWheels API",
        description = "An API to manage HotWheels collectible cars"
    ),
    paths(
        records::create,
        records::create_many,
        records::list,
        records::welcome,
        records::read,
        records::update,
        records::delete,
        records::delete_all,
    ),
    components(schemas(
        Record,
        NewRecord,
        RecordPatch,
        RecordEnvelope,
        RecordListEnvelope,
        StatusEnvelope
    )),
    tags(
        (name = "hot", description = "HotWheels records"),
        (name = "misc", description = "Miscellaneous")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_paths() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = json["paths"].as_object().unwrap();
        for p in ["/api/hot", "/api/hot/multiple", "/api/hot/{id}", "/api/hot/delete-all", "/api/hot/welcome"] {
            assert!(paths.contains_key(p), "missing {}", p);
        }
        assert!(json["components"]["schemas"]["Record"].is_object());
    }
}
