//! Lenient request body: JSON or form-encoded; anything else reads as `{}`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};

/// Raw payload handed to the validators untyped, so schema issues become 400s
/// instead of extractor rejections. Unreadable, oversized or malformed bodies are unexpected failures.
#[derive(Debug)]
pub struct JsonBody(pub Value);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(body_kind)
            .unwrap_or(BodyKind::Other);
        match kind {
            BodyKind::Form => {
                let Form(fields) = Form::<Map<String, Value>>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Unexpected(format!("reading form body: {}", e)))?;
                Ok(JsonBody(Value::Object(fields)))
            }
            BodyKind::Json | BodyKind::Other => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Unexpected(format!("reading body: {}", e)))?;
                if kind == BodyKind::Other || bytes.is_empty() {
                    return Ok(JsonBody(Value::Object(Map::new())));
                }
                parse_json(&bytes).map(JsonBody)
            }
        }
    }
}

/// Strict JSON: only an object or an array is accepted at the top level.
fn parse_json(bytes: &[u8]) -> Result<Value, AppError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::Unexpected(format!("malformed JSON body: {}", e)))?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(AppError::Unexpected(format!(
            "JSON body must be an object or array, got {}",
            other
        ))),
    }
}

fn body_kind(content_type: &str) -> BodyKind {
    let mime = content_type.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}
