use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rate_index::IndexError;
use serde_json::json;
use thiserror::Error;

/// Unified error type for hotel API responses.
#[derive(Debug, Error)]
pub enum HotelError {
    #[error("db_error: {0}")]
    Db(String),
    #[error("bad_request: {0}")]
    BadRequest(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal_error: {0}")]
    Internal(String),
}

impl HotelError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for HotelError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_str = match self {
            Self::Db(msg) => {
                tracing::error!("database failure: {msg}");
                format!("db_error:{msg}")
            }
            Self::Internal(msg) => {
                tracing::error!("internal failure: {msg}");
                msg
            }
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg,
        };

        let body = json!({ "error": error_str });
        (status, axum::Json(body)).into_response()
    }
}

impl From<rusqlite::Error> for HotelError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => Self::Conflict(e.to_string()),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl From<r2d2::Error> for HotelError {
    fn from(e: r2d2::Error) -> Self {
        Self::Db(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for HotelError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing: {e}"))
    }
}

impl From<jsonwebtoken::errors::Error> for HotelError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token issuance: {e}"))
    }
}

impl From<JsonRejection> for HotelError {
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for HotelError {
    fn from(e: QueryRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<PathRejection> for HotelError {
    fn from(e: PathRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<tokio::task::JoinError> for HotelError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {e}"))
    }
}

impl From<IndexError> for HotelError {
    fn from(e: IndexError) -> Self {
        Self::BadRequest(e.to_string())
    }
}
