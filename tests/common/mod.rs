#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use hotwheels_api::{
    app, AppError, AppState, InMemoryRecordStore, NewRecord, Record, RecordId, RecordStore, ServerConfig,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// In-memory store that counts every call reaching it.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: InMemoryRecordStore,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn insert_one(&self, record: NewRecord) -> Result<Record, AppError> {
        self.hit();
        self.inner.insert_one(record).await
    }
    async fn insert_many(&self, records: Vec<NewRecord>) -> Result<Vec<Record>, AppError> {
        self.hit();
        self.inner.insert_many(records).await
    }
    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        self.hit();
        self.inner.find_all().await
    }
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>, AppError> {
        self.hit();
        self.inner.find_by_id(id).await
    }
    async fn save(&self, record: &Record) -> Result<(), AppError> {
        self.hit();
        self.inner.save(record).await
    }
    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError> {
        self.hit();
        self.inner.delete_one(id).await
    }
    async fn delete_all(&self) -> Result<u64, AppError> {
        self.hit();
        self.inner.delete_all().await
    }
    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}

/// Store whose every operation fails, standing in for a lost connection.
pub struct BrokenStore;

fn down() -> AppError {
    AppError::Store("connection refused".into())
}

#[async_trait]
impl RecordStore for BrokenStore {
    async fn insert_one(&self, _: NewRecord) -> Result<Record, AppError> {
        Err(down())
    }
    async fn insert_many(&self, _: Vec<NewRecord>) -> Result<Vec<Record>, AppError> {
        Err(down())
    }
    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        Err(down())
    }
    async fn find_by_id(&self, _: &RecordId) -> Result<Option<Record>, AppError> {
        Err(down())
    }
    async fn save(&self, _: &Record) -> Result<(), AppError> {
        Err(down())
    }
    async fn delete_one(&self, _: &RecordId) -> Result<u64, AppError> {
        Err(down())
    }
    async fn delete_all(&self) -> Result<u64, AppError> {
        Err(down())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(down())
    }
}

/// In-memory store whose `save` fails; lookups still succeed.
#[derive(Clone, Default)]
pub struct SaveFailsStore {
    pub inner: InMemoryRecordStore,
}

#[async_trait]
impl RecordStore for SaveFailsStore {
    async fn insert_one(&self, record: NewRecord) -> Result<Record, AppError> {
        self.inner.insert_one(record).await
    }
    async fn insert_many(&self, records: Vec<NewRecord>) -> Result<Vec<Record>, AppError> {
        self.inner.insert_many(records).await
    }
    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        self.inner.find_all().await
    }
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>, AppError> {
        self.inner.find_by_id(id).await
    }
    async fn save(&self, _: &Record) -> Result<(), AppError> {
        Err(down())
    }
    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError> {
        self.inner.delete_one(id).await
    }
    async fn delete_all(&self) -> Result<u64, AppError> {
        self.inner.delete_all().await
    }
    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}

pub fn router(store: impl RecordStore + 'static) -> Router {
    router_with_config(store, &ServerConfig::default())
}

pub fn router_with_config(store: impl RecordStore + 'static, config: &ServerConfig) -> Router {
    app(AppState::new(store), config)
}

/// Send one request; returns status and parsed JSON body (Null when empty).
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn mustang() -> Value {
    serde_json::json!({ "nome": "Mustang", "modelo": "GT", "ano": 1969, "imagem": "http://x/1.png" })
}
