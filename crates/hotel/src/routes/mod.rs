pub mod pricing;
pub mod reservations;
pub mod rooms;
pub mod users;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .merge(users::routes())
        .merge(rooms::routes())
        .merge(reservations::routes())
        .merge(pricing::routes())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Standard acknowledgement body for state-changing endpoints.
pub(crate) fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}
