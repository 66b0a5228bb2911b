//! HotWheels API: REST CRUD over collectible die-cast car records with a uniform JSON envelope.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError, Failure};
pub use model::{NewRecord, Record, RecordId, RecordPatch};
pub use response::Envelope;
pub use routes::{app, common_routes, record_routes, RECORD_PREFIX};
pub use service::RecordService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_record_table, InMemoryRecordStore, PgRecordStore, RecordStore};
