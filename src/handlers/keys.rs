//! Handlers for `/keys/` and `/keys/{keyId}/`.

use super::{PathParams, Payload};
use crate::error::{ApiError, ApiResult, KEY_NAME_INVALID, KEY_NOT_FOUND};
use crate::models::Key;
use crate::state::AppState;
use crate::validation::validate_key_name;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub struct KeyPayload {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeysResponse {
    pub keys: Vec<Key>,
}

#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub key: Key,
}

fn checked_name(payload: &KeyPayload) -> ApiResult<&str> {
    validate_key_name(payload.name.as_deref()).ok_or_else(|| {
        debug!(name = ?payload.name, "Rejected key name");
        ApiError::Validation(KEY_NAME_INVALID)
    })
}

/// GET /keys/
pub async fn list_keys(State(state): State<AppState>) -> ApiResult<Json<KeysResponse>> {
    let keys = state.store.list_keys().await?;
    Ok(Json(KeysResponse { keys }))
}

/// POST /keys/
pub async fn create_key(
    State(state): State<AppState>,
    Payload(payload): Payload<KeyPayload>,
) -> ApiResult<Json<KeyResponse>> {
    let name = checked_name(&payload)?;
    let key = state.store.create_key(name).await?;

    info!(key_id = key.id, name = %key.name, "Key created");
    Ok(Json(KeyResponse { key }))
}

/// PUT /keys/{keyId}/
///
/// Existence is checked before the name so a missing key is always reported
/// as such. The rename itself is conditional on the row still existing.
pub async fn update_key(
    PathParams(key_id): PathParams<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<KeyPayload>,
) -> ApiResult<Json<KeyResponse>> {
    if !state.store.key_exists(key_id).await? {
        return Err(ApiError::NotFound(KEY_NOT_FOUND));
    }

    let name = checked_name(&payload)?;
    let key = state
        .store
        .rename_key(key_id, name)
        .await?
        .ok_or(ApiError::NotFound(KEY_NOT_FOUND))?;

    info!(key_id = key.id, name = %key.name, "Key renamed");
    Ok(Json(KeyResponse { key }))
}
