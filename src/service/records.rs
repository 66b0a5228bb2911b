//! Record operations against an injected store.

use crate::error::AppError;
use crate::model::{Record, RecordId};
use crate::service::RequestValidator;
use crate::store::RecordStore;
use serde_json::Value;

pub struct RecordService;

impl RecordService {
    /// Lookup-or-fail: validate the identifier, then fetch. Malformed ids never reach the store.
    pub async fn find(store: &dyn RecordStore, id: &str) -> Result<Record, AppError> {
        let id = RecordId::parse(id)?;
        store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub async fn create(store: &dyn RecordStore, body: &Value) -> Result<Record, AppError> {
        let new = RequestValidator::new_record(body)?;
        let record = store.insert_one(new).await?;
        tracing::info!(id = %record.id, "record created");
        Ok(record)
    }

    /// Bulk create from an already-checked non-empty array.
    pub async fn create_many(store: &dyn RecordStore, items: &[Value]) -> Result<Vec<Record>, AppError> {
        let batch = RequestValidator::new_records(items)?;
        let records = store.insert_many(batch).await?;
        tracing::info!(count = records.len(), "records created");
        Ok(records)
    }

    pub async fn list(store: &dyn RecordStore) -> Result<Vec<Record>, AppError> {
        store.find_all().await
    }

    /// Merge the whitelisted fields of `body` onto the stored record and persist it.
    pub async fn update(store: &dyn RecordStore, id: &str, body: &Value) -> Result<Record, AppError> {
        let mut record = Self::find(store, id).await?;
        let patch = RequestValidator::patch(body)?;
        record.apply(patch);
        store.save(&record).await?;
        tracing::info!(id = %record.id, "record updated");
        Ok(record)
    }

    pub async fn delete(store: &dyn RecordStore, id: &str) -> Result<(), AppError> {
        let record = Self::find(store, id).await?;
        if store.delete_one(&record.id).await? == 0 {
            return Err(AppError::NotFound(record.id.to_string()));
        }
        tracing::info!(id = %record.id, "record deleted");
        Ok(())
    }

    /// Wipe the whole collection. Returns the deleted count.
    pub async fn delete_all(store: &dyn RecordStore) -> Result<u64, AppError> {
        tracing::warn!("dangerous operation: deleting every HotWheels record");
        let count = store.delete_all().await?;
        tracing::info!(count, "records deleted");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRecordStore;
    use serde_json::json;

    fn mustang() -> Value {
        json!({ "nome": "Mustang", "modelo": "GT", "ano": 1969, "imagem": "http://x/1.png" })
    }

    #[tokio::test]
    async fn created_record_is_retrievable() {
        let store = InMemoryRecordStore::new();
        let created = RecordService::create(&store, &mustang()).await.unwrap();
        let found = RecordService::find(&store, created.id.as_str()).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.nome, "Mustang");
    }

    #[tokio::test]
    async fn find_distinguishes_invalid_id_from_not_found() {
        let store = InMemoryRecordStore::new();
        assert!(matches!(
            RecordService::find(&store, "abc").await,
            Err(AppError::InvalidId(_))
        ));
        assert!(matches!(
            RecordService::find(&store, "65f1c0de9a1b2c3d4e5f6071").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let store = InMemoryRecordStore::new();
        let created = RecordService::create(&store, &mustang()).await.unwrap();
        let updated = RecordService::update(&store, created.id.as_str(), &json!({ "ano": 1970 }))
            .await
            .unwrap();
        assert_eq!(updated.ano, 1970);
        assert_eq!(updated.modelo, "GT");
        let stored = RecordService::find(&store, created.id.as_str()).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn rejected_patch_leaves_record_untouched() {
        let store = InMemoryRecordStore::new();
        let created = RecordService::create(&store, &mustang()).await.unwrap();
        let err = RecordService::update(&store, created.id.as_str(), &json!({ "ano": 1970, "cor": "red" }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let stored = RecordService::find(&store, created.id.as_str()).await.unwrap();
        assert_eq!(stored.ano, 1969);
    }

    #[tokio::test]
    async fn delete_then_find_is_not_found() {
        let store = InMemoryRecordStore::new();
        let created = RecordService::create(&store, &mustang()).await.unwrap();
        RecordService::delete(&store, created.id.as_str()).await.unwrap();
        assert!(matches!(
            RecordService::find(&store, created.id.as_str()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            RecordService::delete(&store, created.id.as_str()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn bad_bulk_element_inserts_nothing() {
        let store = InMemoryRecordStore::new();
        let items = vec![mustang(), json!({ "nome": "Camaro" })];
        assert!(RecordService::create_many(&store, &items).await.is_err());
        assert!(RecordService::list(&store).await.unwrap().is_empty());
    }
}
