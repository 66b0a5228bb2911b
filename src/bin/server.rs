//! HotWheels server: reads config from env (and `.env`), prepares the store, mounts all routes.

use hotwheels_api::{
    app, ensure_database_exists, ensure_record_table, AppState, InMemoryRecordStore, PgRecordStore,
    ServerConfig, StoreKind,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hotwheels_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_record_table(&pool, &config.schema).await?;
            AppState::new(PgRecordStore::new(pool, &config.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on restart");
            AppState::new(InMemoryRecordStore::new())
        }
    };

    let router = app(state, &config);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
