use crate::config::Config;
use crate::error::DetectError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Infers the most likely locale of a piece of text.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Return a two-letter locale code (e.g. "en", "ko", "ja") for `text`.
    async fn detect(&self, text: &str) -> Result<String, DetectError>;
}

/// detectlanguage.com detect request
#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Detection>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
    #[serde(rename = "isReliable", default)]
    is_reliable: bool,
    #[serde(default)]
    confidence: f64,
}

/// Client for the detectlanguage.com API.
///
/// Failures are returned as-is; this client never retries.
#[derive(Debug, Clone)]
pub struct DetectLanguageClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl DetectLanguageClient {
    pub fn new(config: &Config) -> Result<Self, DetectError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.detect_language_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.detect_language_api_url.clone(),
            api_key: config.detect_language_api_key.clone(),
        })
    }
}

#[async_trait]
impl LanguageDetector for DetectLanguageClient {
    /// Return the provider's best detection (its "simple detect").
    async fn detect(&self, text: &str) -> Result<String, DetectError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&DetectRequest { q: text })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(DetectError::Status { status, body });
        }

        let parsed: DetectResponse = response.json().await?;
        let best = parsed
            .data
            .detections
            .into_iter()
            .next()
            .ok_or(DetectError::NoDetection)?;

        debug!(
            locale = %best.language,
            reliable = best.is_reliable,
            confidence = best.confidence,
            "Detected language"
        );

        Ok(best.language)
    }
}
