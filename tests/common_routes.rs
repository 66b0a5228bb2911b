mod common;

use axum::http::{Method, StatusCode};
use common::{router, send, BrokenStore};
use hotwheels_api::InMemoryRecordStore;

#[tokio::test]
async fn health_and_version() {
    let app = router(InMemoryRecordStore::new());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "hotwheels-api");
}

#[tokio::test]
async fn ready_reflects_store() {
    let (status, body) = send(&router(InMemoryRecordStore::new()), Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");

    let (status, body) = send(&router(BrokenStore), Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = router(InMemoryRecordStore::new());
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "HotWheels API");
    assert!(body["paths"]["/api/hot/{id}"]["get"].is_object());
    assert!(body["paths"]["/api/hot/delete-all"]["delete"].is_object());
}
