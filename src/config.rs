//! Server configuration from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::str::FromStr;

/// Which record store backs the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Process-local, lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::UnknownStore(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub database_url: String,
    /// Schema holding the records table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".into(),
            port: 3000,
            store: StoreKind::Postgres,
            database_url: "postgres://localhost/hotwheels".into(),
            schema: "hotwheels".into(),
            max_connections: 5,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_value("PORT", &port)?;
        }
        if let Some(store) = lookup("STORE") {
            config.store = store.parse()?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(schema) = lookup("HOTWHEELS_SCHEMA") {
            config.schema = schema;
        }
        if let Some(n) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = parse_value("DB_MAX_CONNECTIONS", &n)?;
        }
        if let Some(n) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit_bytes = parse_value("BODY_LIMIT_BYTES", &n)?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
