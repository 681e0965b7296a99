//! Error types for the store, the detector and the HTTP layer.
//!
//! Every [`ApiError`] renders as `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const KEY_NAME_INVALID: &str = "key name should be only lower case alphabet and dot(.)";
pub const KEY_NOT_FOUND: &str = "key doesn't exist";
pub const TRANSLATION_NOT_FOUND: &str = "translation doesn't exist";
pub const TRANSLATION_VALUE_MISSING: &str = "translation value doesn't exist";
pub const TRANSLATION_LOCALE_DIFFERENT: &str = "translation locale is different";
pub const TRANSLATION_ALREADY_EXISTS: &str = "translation already exists";
pub const TRANSLATION_LOCALE_INVALID: &str = "translation locale should be two alphabet letters";
pub const NOTHING_TO_DETECT: &str = "nothing to detect";
pub const INVALID_PATH_PARAMETER: &str = "invalid path parameter";
pub const BODY_TOO_LARGE: &str = "request body is too large";

/// Failures of the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A referenced row does not exist (e.g. foreign key violation).
    #[error("referenced row not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("row already exists")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify a sqlx error by its PostgreSQL SQLSTATE.
    ///
    /// - `23503` (foreign key violation) maps to [`StoreError::NotFound`]
    /// - `23505` (unique violation) maps to [`StoreError::Conflict`]
    pub fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some("23503") => return StoreError::NotFound,
                Some("23505") => return StoreError::Conflict,
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

/// Failures of the external language detection provider.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("failed to reach language detection provider: {0}")]
    Request(#[from] reqwest::Error),

    #[error("language detection provider error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("language detection provider returned no detection")]
    NoDetection,
}

/// Application-level error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Wrong HTTP verb for the endpoint.
    #[error("{0}")]
    MethodNotAllowed(&'static str),

    /// Malformed input; nothing was written.
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    PayloadTooLarge(&'static str),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, *msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, *msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, *msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, *msg),
            ApiError::Detect(err) => {
                tracing::error!(error = %err, "Language detection failed");
                (StatusCode::BAD_GATEWAY, "language detection failed")
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal storage error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
