//! Request handlers for keys, their translations and language detection,
//! plus the extractors they share.

pub mod keys;
pub mod language;
pub mod translations;

use crate::error::{ApiError, BODY_TOO_LARGE, INVALID_PATH_PARAMETER};
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Form;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Path parameters that reject with a JSON [`ApiError`] instead of axum's
/// plain-text rejection.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParams(value)),
            Err(rejection) => {
                debug!(error = %rejection, "Rejected path parameters");
                Err(ApiError::Validation(INVALID_PATH_PARAMETER))
            }
        }
    }
}

/// Request body accepted as JSON or as an urlencoded form.
///
/// An absent, empty or unparseable body yields `T::default()`, so each
/// handler reports its own "missing field" error instead of a rejection.
/// Only a body over the size limit is rejected (413).
#[derive(Debug)]
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            return match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Payload(value)),
                Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    Err(ApiError::PayloadTooLarge(BODY_TOO_LARGE))
                }
                Err(_) => Ok(Payload(T::default())),
            };
        }

        let value = match Bytes::from_request(req, state).await {
            Ok(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(ApiError::PayloadTooLarge(BODY_TOO_LARGE));
            }
            _ => T::default(),
        };
        Ok(Payload(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        value: Option<String>,
    }

    async fn try_extract(content_type: Option<&str>, body: Body) -> Result<Sample, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(body).expect("request");
        Payload::<Sample>::from_request(req, &())
            .await
            .map(|Payload(sample)| sample)
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Sample {
        try_extract(content_type, Body::from(body))
            .await
            .expect("should extract")
    }

    /// One byte over axum's default 2 MB body limit
    fn oversized_body() -> Body {
        Body::from(vec![b'a'; 2 * 1024 * 1024 + 1])
    }

    #[tokio::test]
    async fn test_json_body() {
        let sample = extract(Some("application/json"), r#"{"value":"hello"}"#).await;
        assert_eq!(sample.value.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_json_body_without_content_type() {
        let sample = extract(None, r#"{"value":"hello"}"#).await;
        assert_eq!(sample.value.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_form_body() {
        let sample = extract(
            Some("application/x-www-form-urlencoded"),
            "value=this+is+message+for+test",
        )
        .await;
        assert_eq!(sample.value.as_deref(), Some("this is message for test"));
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        assert_eq!(extract(Some("application/json"), "").await, Sample::default());
    }

    #[tokio::test]
    async fn test_malformed_body_is_default() {
        assert_eq!(extract(Some("application/json"), "{not json").await, Sample::default());
        assert_eq!(extract(None, r#"{"value": 42}"#).await, Sample::default());
    }

    #[tokio::test]
    async fn test_oversized_json_body_is_rejected() {
        let err = try_extract(Some("application/json"), oversized_body())
            .await
            .expect_err("should reject");
        assert!(matches!(err, ApiError::PayloadTooLarge(BODY_TOO_LARGE)));
    }

    #[tokio::test]
    async fn test_oversized_form_body_is_rejected() {
        let err = try_extract(Some("application/x-www-form-urlencoded"), oversized_body())
            .await
            .expect_err("should reject");
        assert!(matches!(err, ApiError::PayloadTooLarge(BODY_TOO_LARGE)));
    }
}
