use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::db::rooms::{self, Room};
use crate::error::HotelError;
use crate::state::AppState;

use super::message;

#[derive(Debug, Deserialize)]
pub struct RoomDetails {
    room_number: String,
    rate: f64,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/rooms", post(api_add_room))
        .route("/rooms", get(api_list_rooms))
}

async fn api_add_room(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RoomDetails>, JsonRejection>,
) -> Result<Json<Value>, HotelError> {
    let Json(body) = body?;
    let room_number = body.room_number.trim();
    if room_number.is_empty() {
        return Err(HotelError::BadRequest("room_number must not be empty".to_string()));
    }
    if !body.rate.is_finite() || body.rate < 0.0 {
        tracing::warn!("rejected rate {} for room {room_number}", body.rate);
        return Err(HotelError::BadRequest(
            "rate must be a finite, non-negative number".to_string(),
        ));
    }

    let conn = state.pool.get()?;
    let id = rooms::insert_room(&conn, room_number, body.rate)?;

    tracing::info!(room_id = id, rate = body.rate, "added room {room_number}");
    Ok(message("Room added successfully."))
}

async fn api_list_rooms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Room>>, HotelError> {
    let conn = state.pool.get()?;
    Ok(Json(rooms::list_rooms(&conn)?))
}
