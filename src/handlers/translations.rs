//! Handlers for `/keys/{keyId}/translations/` and
//! `/keys/{keyId}/translations/{locale}/`.
//!
//! Every write checks that the path locale is a two-letter code, then
//! re-detects the locale of the submitted value and refuses it unless it
//! equals the locale in the path.

use super::{PathParams, Payload};
use crate::detect::LanguageDetector;
use crate::error::{
    ApiError, ApiResult, StoreError, KEY_NOT_FOUND, TRANSLATION_ALREADY_EXISTS,
    TRANSLATION_LOCALE_DIFFERENT, TRANSLATION_LOCALE_INVALID, TRANSLATION_NOT_FOUND,
    TRANSLATION_VALUE_MISSING,
};
use crate::models::Translation;
use crate::state::AppState;
use crate::validation::{locale_matches, non_empty, validate_locale};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub struct TranslationPayload {
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub translations: Vec<Translation>,
}

/// `translation` is `null` when no row matches.
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub translation: Option<Translation>,
}

fn checked_locale(locale: &str) -> ApiResult<()> {
    if validate_locale(locale) {
        Ok(())
    } else {
        debug!(locale = %locale, "Rejected translation locale");
        Err(ApiError::Validation(TRANSLATION_LOCALE_INVALID))
    }
}

fn required_value(payload: TranslationPayload) -> ApiResult<String> {
    non_empty(payload.value).ok_or(ApiError::Validation(TRANSLATION_VALUE_MISSING))
}

async fn ensure_detected_locale(
    detector: &dyn LanguageDetector,
    locale: &str,
    value: &str,
) -> ApiResult<()> {
    let detected = detector.detect(value).await?;
    if locale_matches(locale, &detected) {
        Ok(())
    } else {
        debug!(requested = %locale, detected = %detected, "Translation locale mismatch");
        Err(ApiError::Validation(TRANSLATION_LOCALE_DIFFERENT))
    }
}

/// GET /keys/{keyId}/translations/
pub async fn list_translations(
    PathParams(key_id): PathParams<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<TranslationsResponse>> {
    let translations = state.store.list_translations(key_id).await?;
    Ok(Json(TranslationsResponse { translations }))
}

/// GET /keys/{keyId}/translations/{locale}/
pub async fn get_translation(
    PathParams((key_id, locale)): PathParams<(i64, String)>,
    State(state): State<AppState>,
) -> ApiResult<Json<TranslationResponse>> {
    let translation = state.store.find_translation(key_id, &locale).await?;
    Ok(Json(TranslationResponse { translation }))
}

/// POST /keys/{keyId}/translations/{locale}/
pub async fn create_translation(
    PathParams((key_id, locale)): PathParams<(i64, String)>,
    State(state): State<AppState>,
    Payload(payload): Payload<TranslationPayload>,
) -> ApiResult<Json<TranslationResponse>> {
    checked_locale(&locale)?;
    let value = required_value(payload)?;
    ensure_detected_locale(state.detector.as_ref(), &locale, &value).await?;

    let translation = match state.store.create_translation(key_id, &locale, &value).await {
        Ok(translation) => translation,
        Err(StoreError::NotFound) => return Err(ApiError::NotFound(KEY_NOT_FOUND)),
        Err(StoreError::Conflict) => return Err(ApiError::Conflict(TRANSLATION_ALREADY_EXISTS)),
        Err(e) => return Err(e.into()),
    };

    info!(
        key_id,
        locale = %locale,
        translation_id = translation.id,
        "Translation created"
    );
    Ok(Json(TranslationResponse {
        translation: Some(translation),
    }))
}

/// PUT /keys/{keyId}/translations/{locale}/
///
/// Only `value` changes; the locale of the row is fixed by the path.
pub async fn update_translation(
    PathParams((key_id, locale)): PathParams<(i64, String)>,
    State(state): State<AppState>,
    Payload(payload): Payload<TranslationPayload>,
) -> ApiResult<Json<TranslationResponse>> {
    checked_locale(&locale)?;
    if state.store.find_translation(key_id, &locale).await?.is_none() {
        return Err(ApiError::NotFound(TRANSLATION_NOT_FOUND));
    }

    let value = required_value(payload)?;
    ensure_detected_locale(state.detector.as_ref(), &locale, &value).await?;

    let translation = state
        .store
        .update_translation_value(key_id, &locale, &value)
        .await?
        .ok_or(ApiError::NotFound(TRANSLATION_NOT_FOUND))?;

    info!(
        key_id,
        locale = %locale,
        translation_id = translation.id,
        "Translation updated"
    );
    Ok(Json(TranslationResponse {
        translation: Some(translation),
    }))
}
