//! Router assembly.

mod common;
mod records;

pub use common::common_routes;
pub use records::record_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Resource prefix for the record routes.
pub const RECORD_PREFIX: &str = "/api/hot";

/// Full application: common routes plus record routes under [`RECORD_PREFIX`],
/// with request tracing and a body size limit. Oversized bodies are rejected by the
/// JSON extractor, so the 413 carries the usual envelope.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(RECORD_PREFIX, record_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
