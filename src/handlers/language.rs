use crate::error::{ApiError, ApiResult, NOTHING_TO_DETECT};
use crate::state::AppState;
use crate::validation::non_empty;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct DetectQuery {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub locale: String,
}

/// GET /language-detect/?message=...
pub async fn detect_language(
    State(state): State<AppState>,
    Query(query): Query<DetectQuery>,
) -> ApiResult<Json<DetectResponse>> {
    let message = non_empty(query.message).ok_or(ApiError::Validation(NOTHING_TO_DETECT))?;
    let locale = state.detector.detect(&message).await?;
    Ok(Json(DetectResponse { locale }))
}
