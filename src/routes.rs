//! HTTP routing.
//!
//! Each path has its own method table; any verb outside it falls through to a
//! JSON 405 error naming the verbs the endpoint accepts.

use crate::error::ApiError;
use crate::handlers::{keys, language, translations};
use crate::state::AppState;
use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

pub const KEYS_METHODS: &str = "keys could be only GET or POST request method.";
pub const KEY_UPDATE_METHODS: &str = "key update could be only PUT request method.";
pub const TRANSLATION_LIST_METHODS: &str = "translation list could be only GET request method.";
pub const TRANSLATION_METHODS: &str = "translation could be only GET, POST or PUT request method.";
pub const LANGUAGE_DETECT_METHODS: &str = "language detect could be only GET request method.";

/// Build the application router.
///
/// ```text
/// GET  POST      /keys/
/// PUT            /keys/:key_id/
/// GET            /keys/:key_id/translations/
/// GET  POST PUT  /keys/:key_id/translations/:locale/
/// GET            /language-detect/
/// ```
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/keys/",
            get(keys::list_keys)
                .post(keys::create_key)
                .fallback(|| async { ApiError::MethodNotAllowed(KEYS_METHODS) }),
        )
        .route(
            "/keys/:key_id/",
            put(keys::update_key)
                .fallback(|| async { ApiError::MethodNotAllowed(KEY_UPDATE_METHODS) }),
        )
        .route(
            "/keys/:key_id/translations/",
            get(translations::list_translations)
                .fallback(|| async { ApiError::MethodNotAllowed(TRANSLATION_LIST_METHODS) }),
        )
        .route(
            "/keys/:key_id/translations/:locale/",
            get(translations::get_translation)
                .post(translations::create_translation)
                .put(translations::update_translation)
                .fallback(|| async { ApiError::MethodNotAllowed(TRANSLATION_METHODS) }),
        )
        .route(
            "/language-detect/",
            get(language::detect_language)
                .fallback(|| async { ApiError::MethodNotAllowed(LANGUAGE_DETECT_METHODS) }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
