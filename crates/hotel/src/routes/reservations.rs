use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::db::bookings::{self, Booking, NewBooking};
use crate::error::HotelError;
use crate::state::AppState;

use super::message;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    room_ref: i64,
    check_in_date: String,
    check_out_date: String,
    #[serde(default = "default_client_id")]
    client_id: i64,
}

/// Guest id recorded when the request does not name one.
fn default_client_id() -> i64 {
    1
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reservation", post(api_reserve))
        .route("/reservation/{booking_id}", delete(api_cancel))
        .route("/admin/reservations", get(api_list_reservations))
}

async fn api_reserve(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<Value>, HotelError> {
    let Json(body) = body?;
    let mut conn = state.pool.get()?;
    let booking = NewBooking {
        client_id: body.client_id,
        room_ref: body.room_ref,
        check_in_date: &body.check_in_date,
        check_out_date: &body.check_out_date,
    };

    let id = bookings::reserve(&mut conn, &booking).inspect_err(|e| {
        tracing::warn!("reservation of room {} refused: {e}", body.room_ref);
    })?;

    tracing::info!(booking_id = id, room_ref = body.room_ref, "room booked");
    Ok(message("Room successfully booked."))
}

async fn api_list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, HotelError> {
    let conn = state.pool.get()?;
    Ok(Json(bookings::list_bookings(&conn)?))
}

async fn api_cancel(
    State(state): State<Arc<AppState>>,
    booking_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, HotelError> {
    let Path(booking_id) = booking_id?;
    let mut conn = state.pool.get()?;
    bookings::cancel(&mut conn, booking_id)?;

    tracing::info!(booking_id, "booking cancelled");
    Ok(message("Booking cancelled successfully."))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{send, test_app};

    async fn app_with_room() -> axum::Router {
        let app = test_app();
        send(
            &app,
            "POST",
            "/admin/rooms",
            Some(json!({ "room_number": "101", "rate": 120.0 })),
        )
        .await;
        app
    }

    fn booking_body(room_ref: i64) -> serde_json::Value {
        json!({
            "room_ref": room_ref,
            "check_in_date": "2026-11-01",
            "check_out_date": "2026-11-04",
        })
    }

    #[tokio::test]
    async fn booking_occupies_the_room() {
        let app = app_with_room().await;

        let (status, body) = send(&app, "POST", "/reservation", Some(booking_body(1))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Room successfully booked." }));

        let (_, rooms) = send(&app, "GET", "/rooms", None).await;
        assert_eq!(rooms[0]["occupied"], true);

        let (_, bookings) = send(&app, "GET", "/admin/reservations", None).await;
        assert_eq!(
            bookings,
            json!([{
                "id": 1,
                "client_id": 1,
                "room_ref": 1,
                "check_in_date": "2026-11-01",
                "check_out_date": "2026-11-04",
            }])
        );
    }

    #[tokio::test]
    async fn double_booking_and_unknown_room_are_refused() {
        let app = app_with_room().await;
        send(&app, "POST", "/reservation", Some(booking_body(1))).await;

        for room_ref in [1, 99] {
            let (status, body) =
                send(&app, "POST", "/reservation", Some(booking_body(room_ref))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Room not available" }));
        }
    }

    #[tokio::test]
    async fn cancelling_frees_the_room() {
        let app = app_with_room().await;
        send(&app, "POST", "/reservation", Some(booking_body(1))).await;

        let (status, body) = send(&app, "DELETE", "/reservation/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Booking cancelled successfully." }));

        let (_, rooms) = send(&app, "GET", "/rooms", None).await;
        assert_eq!(rooms[0]["occupied"], false);
        let (_, bookings) = send(&app, "GET", "/admin/reservations", None).await;
        assert_eq!(bookings, json!([]));
    }

    #[tokio::test]
    async fn cancelling_unknown_booking_is_not_found() {
        let app = test_app();
        let (status, body) = send(&app, "DELETE", "/reservation/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Booking not found" }));
    }

    #[tokio::test]
    async fn malformed_booking_id_and_body_are_json_bad_requests() {
        let app = test_app();
        let (status, body) = send(&app, "DELETE", "/reservation/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");

        let (status, body) =
            send(&app, "POST", "/reservation", Some(json!({ "room_ref": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");
    }

    #[tokio::test]
    async fn unregistered_guest_can_book() {
        let app = app_with_room().await;
        let mut body = booking_body(1);
        body["client_id"] = json!(4242);
        let (status, _) = send(&app, "POST", "/reservation", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn explicit_client_id_is_recorded() {
        let app = app_with_room().await;
        let mut body = booking_body(1);
        body["client_id"] = json!(7);
        send(&app, "POST", "/reservation", Some(body)).await;

        let (_, bookings) = send(&app, "GET", "/admin/reservations", None).await;
        assert_eq!(bookings[0]["client_id"], 7);
    }
}
