//! Persistence store for records: the `RecordStore` trait and its PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::InMemoryRecordStore;
pub use postgres::{ensure_database_exists, ensure_record_table, PgRecordStore};

use crate::error::AppError;
use crate::model::{NewRecord, Record, RecordId};
use async_trait::async_trait;

/// CRUD primitives over the single record collection.
///
/// Implementations assign identifiers on insert. `insert_many` is the backend's own bulk
/// primitive; both bundled backends apply it all-or-nothing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_one(&self, record: NewRecord) -> Result<Record, AppError>;

    async fn insert_many(&self, records: Vec<NewRecord>) -> Result<Vec<Record>, AppError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<Record>, AppError>;

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>, AppError>;

    /// Persist a mutated record in place. Fails with `NotFound` if it no longer exists.
    async fn save(&self, record: &Record) -> Result<(), AppError>;

    /// Returns the number of records deleted (0 or 1).
    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError>;

    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
