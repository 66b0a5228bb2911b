//! Record CRUD routes. Static segments (`/multiple`, `/welcome`, `/delete-all`) win over `/:id`.

use crate::handlers::records::{
    create, create_many, delete as delete_handler, delete_all, list, read, update, welcome,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Routes relative to the resource prefix; mount under `/api/hot`.
pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/multiple", post(create_many))
        .route("/welcome", get(welcome))
        .route("/delete-all", delete(delete_all))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
