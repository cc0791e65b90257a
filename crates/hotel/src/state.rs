use std::sync::Arc;

use crate::auth;
use crate::config::HotelConfig;
use crate::db::pool::DbPool;
use crate::error::HotelError;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
pub struct AppState {
    pub config: HotelConfig,
    pub pool: DbPool,
    /// Hash at the configured cost, checked when a login names no known user.
    pub dummy_hash: String,
}

impl AppState {
    pub fn new(config: HotelConfig, pool: DbPool) -> Result<Arc<Self>, HotelError> {
        let dummy_hash = auth::hash_password("unused-login-placeholder", config.bcrypt_cost)?;
        Ok(Arc::new(Self {
            config,
            pool,
            dummy_hash,
        }))
    }
}
