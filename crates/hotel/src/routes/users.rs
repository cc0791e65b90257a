use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::task::spawn_blocking;

use crate::auth;
use crate::db::users;
use crate::error::HotelError;
use crate::state::AppState;

use super::message;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/register", post(api_register))
        .route("/user/login", post(api_login))
}

async fn api_register(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, HotelError> {
    let Json(body) = body?;
    let username = body.username.trim().to_string();
    if username.is_empty() {
        return Err(HotelError::BadRequest("username must not be empty".to_string()));
    }

    let cost = state.config.bcrypt_cost;
    let password = body.password;
    let hashed = spawn_blocking(move || auth::hash_password(&password, cost)).await??;

    let conn = state.pool.get()?;
    let id = users::insert_user(&conn, &username, &hashed)?;

    tracing::info!(user_id = id, "registered user {username}");
    Ok(message("User registered successfully."))
}

async fn api_login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, HotelError> {
    let Json(body) = body?;
    let username = body.username.trim().to_string();
    let user = {
        let conn = state.pool.get()?;
        users::find_by_username(&conn, &username)?
    };

    let stored_hash = user.as_ref().map(|u| u.hashed_pw.clone());
    let dummy_hash = state.dummy_hash.clone();
    let password = body.password;
    let verified = spawn_blocking(move || {
        auth::verify_credentials(&password, stored_hash.as_deref(), &dummy_hash)
    })
    .await?;

    let Some(user) = user.filter(|_| verified) else {
        tracing::warn!("rejected login for {username}");
        return Err(HotelError::InvalidCredentials);
    };

    let token = auth::issue_token(
        &user.username,
        &state.config.jwt_secret,
        state.config.token_ttl_minutes,
    )?;
    Ok(Json(json!({
        "access_token": token,
        "token_type": "bearer",
    })))
}
