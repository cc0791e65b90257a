use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::db::rooms;
use crate::error::HotelError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    left: i64,
    right: i64,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/dynamic-pricing", get(api_dynamic_pricing))
}

/// Cheapest current rate among rooms `left..=right`, counted in room-id order.
///
/// The index is rebuilt from a fresh rate snapshot on every request.
async fn api_dynamic_pricing(
    State(state): State<Arc<AppState>>,
    q: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Value>, HotelError> {
    let Query(q) = q?;
    let rates = {
        let conn = state.pool.get()?;
        rooms::rate_snapshot(&conn)?
    };

    let min_rate = rate_index::min_rate_in_range(&rates, q.left, q.right).inspect_err(|e| {
        tracing::warn!("pricing query [{}, {}] over {} rates refused: {e}", q.left, q.right, rates.len());
    })?;

    tracing::debug!(left = q.left, right = q.right, min_rate, "pricing query answered");
    Ok(Json(json!({ "min_rate_in_range": min_rate })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{send, test_app};

    async fn app_with_rates(rates: &[f64]) -> axum::Router {
        let app = test_app();
        for (i, rate) in rates.iter().enumerate() {
            let (status, _) = send(
                &app,
                "POST",
                "/admin/rooms",
                Some(json!({ "room_number": format!("{}", 100 + i), "rate": rate })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        app
    }

    #[tokio::test]
    async fn minimum_over_inclusive_range() {
        let app = app_with_rates(&[3.0, 1.0, 4.0, 1.5, 2.0]).await;

        for (uri, expected) in [
            ("/dynamic-pricing?left=0&right=4", 1.0),
            ("/dynamic-pricing?left=2&right=2", 4.0),
            ("/dynamic-pricing?left=1&right=3", 1.0),
            ("/dynamic-pricing?left=3&right=4", 1.5),
        ] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!({ "min_rate_in_range": expected }), "{uri}");
        }
    }

    #[tokio::test]
    async fn snapshot_reflects_rooms_added_between_requests() {
        let app = app_with_rates(&[150.0, 180.0]).await;
        let (_, body) = send(&app, "GET", "/dynamic-pricing?left=0&right=1", None).await;
        assert_eq!(body["min_rate_in_range"], 150.0);

        send(
            &app,
            "POST",
            "/admin/rooms",
            Some(json!({ "room_number": "900", "rate": 60.0 })),
        )
        .await;
        let (_, body) = send(&app, "GET", "/dynamic-pricing?left=0&right=2", None).await;
        assert_eq!(body["min_rate_in_range"], 60.0);
    }

    #[tokio::test]
    async fn invalid_ranges_are_client_errors() {
        let app = app_with_rates(&[3.0, 1.0, 4.0]).await;
        for uri in [
            "/dynamic-pricing?left=2&right=1",
            "/dynamic-pricing?left=0&right=3",
            "/dynamic-pricing?left=-1&right=1",
        ] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    async fn empty_inventory_is_a_client_error() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/dynamic-pricing?left=0&right=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "cannot build a rate index over an empty rate sequence" })
        );
    }

    #[tokio::test]
    async fn missing_bound_is_a_json_bad_request() {
        let app = app_with_rates(&[3.0]).await;
        let (status, body) = send(&app, "GET", "/dynamic-pricing?left=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("right")), "{body}");
    }
}
