//! Guard that the request declares a JSON body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::CONTENT_TYPE, request::Parts},
};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Rejects with 415 unless `Content-Type` is exactly `application/json`.
///
/// Runs from request parts, so it is checked before the body is read or validated.
#[derive(Clone, Copy, Debug)]
pub struct RequireJson;

#[async_trait]
impl<S> FromRequestParts<S> for RequireJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        match content_type {
            Some(JSON_MEDIA_TYPE) => Ok(RequireJson),
            other => {
                tracing::error!(content_type = ?other, "invalid Content-Type");
                Err(AppError::UnsupportedMediaType(format!(
                    "Content-Type must be {}",
                    JSON_MEDIA_TYPE
                )))
            }
        }
    }
}
