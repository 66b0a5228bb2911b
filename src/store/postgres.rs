//! PostgreSQL record store and startup DDL.

use super::RecordStore;
use crate::error::AppError;
use crate::model::{NewRecord, Record, RecordId};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const RECORD_TABLE: &str = "hot_wheels";

type RecordRow = (String, String, String, i32, String);

fn row_to_record((id, nome, modelo, ano, imagem): RecordRow) -> Record {
    Record {
        id: RecordId::from_stored(id),
        nome,
        modelo,
        ano,
        imagem,
    }
}

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(RECORD_TABLE))
}

/// Create the schema and record table if they do not exist. Idempotent.
pub async fn ensure_record_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            seq BIGSERIAL NOT NULL,
            id TEXT PRIMARY KEY,
            nome TEXT NOT NULL,
            modelo TEXT NOT NULL,
            ano INTEGER NOT NULL,
            imagem TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        qualified_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

/// Records in `<schema>.hot_wheels`, insertion order kept by a serial column.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    table: String,
}

impl PgRecordStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgRecordStore {
            pool,
            table: qualified_table(schema),
        }
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (id, nome, modelo, ano, imagem) VALUES ($1, $2, $3, $4, $5)",
            self.table
        )
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_one(&self, new: NewRecord) -> Result<Record, AppError> {
        let record = Record::from_new(RecordId::generate(), new);
        let sql = self.insert_sql();
        tracing::debug!(sql = %sql, id = %record.id, "query");
        sqlx::query(&sql)
            .bind(record.id.as_str())
            .bind(&record.nome)
            .bind(&record.modelo)
            .bind(record.ano)
            .bind(&record.imagem)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert_many(&self, items: Vec<NewRecord>) -> Result<Vec<Record>, AppError> {
        let sql = self.insert_sql();
        let mut out = Vec::with_capacity(items.len());
        let mut tx = self.pool.begin().await?;
        for new in items {
            let record = Record::from_new(RecordId::generate(), new);
            tracing::debug!(sql = %sql, id = %record.id, "query (tx)");
            sqlx::query(&sql)
                .bind(record.id.as_str())
                .bind(&record.nome)
                .bind(&record.modelo)
                .bind(record.ano)
                .bind(&record.imagem)
                .execute(&mut *tx)
                .await?;
            out.push(record);
        }
        tx.commit().await?;
        Ok(out)
    }

    async fn find_all(&self) -> Result<Vec<Record>, AppError> {
        let sql = format!(
            "SELECT id, nome, modelo, ano, imagem FROM {} ORDER BY seq",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<RecordRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Record>, AppError> {
        let sql = format!(
            "SELECT id, nome, modelo, ano, imagem FROM {} WHERE id = $1",
            self.table
        );
        tracing::debug!(sql = %sql, id = %id, "query");
        let row: Option<RecordRow> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(row_to_record))
    }

    async fn save(&self, record: &Record) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET nome = $2, modelo = $3, ano = $4, imagem = $5, updated_at = NOW() WHERE id = $1",
            self.table
        );
        tracing::debug!(sql = %sql, id = %record.id, "query");
        let result = sqlx::query(&sql)
            .bind(record.id.as_str())
            .bind(&record.nome)
            .bind(&record.modelo)
            .bind(record.ano)
            .bind(&record.imagem)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(record.id.to_string()));
        }
        Ok(())
    }

    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id = %id, "query");
        let result = sqlx::query(&sql).bind(id.as_str()).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {}", self.table);
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(&sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
