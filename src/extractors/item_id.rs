//! Extract and validate the `:id` path segment.

use crate::error::AppError;
use crate::model::ItemId;
use crate::service::{ItemValidator, ID_REQUIRED};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Validated item id from the request path. Rejects with a 400 carrying the first issue.
#[derive(Clone, Copy, Debug)]
pub struct ItemIdParam(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(ID_REQUIRED.to_string()))?;
        let id = ItemValidator::validate_id(Some(raw.0.as_str())).map_err(AppError::BadRequest)?;
        Ok(ItemIdParam(id))
    }
}
