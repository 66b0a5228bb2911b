//! In-memory record store for tests and `STORE=memory`.

use super::RecordStore;
use crate::error::AppError;
use crate::model::{NewRecord, Record, RecordId};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Records kept in insertion order behind a lock. Cloning shares the same collection.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Record>>, AppError> {
        self.records
            .read()
            .map_err(|_| AppError::Store("record lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Record>>, AppError> {
        self.records
            .write()
            .map_err(|_| AppError::Store("record lock poisoned".into()))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert_one(&self, new: NewRecord) -> Result<Record, AppError> {
        let record = Record::from_new(RecordId::generate(), new);
        self.write()?.push(record.clone());
        Ok(record)
    }

    async fn insert_many(&self, items: Vec<NewRecord>) -> Result<Vec<Record>, AppError> {
        let created: Vec<Record> = items
            .into_iter()
            .map(|new| Record::from_new(RecordId::generate(), new))
            .collect();
        self.write()?.extend(created.iter().cloned());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>, AppError> {
        Ok(self.read()?.iter().find(|r| &r.id == id).cloned())
    }

    async fn save(&self, record: &Record) -> Result<(), AppError> {
        let mut records = self.write()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| AppError::NotFound(record.id.to_string()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        Ok((before - records.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut records = self.write()?;
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
