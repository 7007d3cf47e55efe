//! Typed errors per layer and their HTTP mapping.

use crate::response::{error_body, unexpected_body, FieldIssue};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store kind: {0}")]
    UnknownStore(String),
}

/// Failures surfaced by an [`ItemStore`](crate::store::ItemStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Update or delete targeted a row that does not exist.
    #[error("record not found")]
    RecordNotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Domain errors raised by [`ItemService`](crate::service::ItemService).
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Item not found!")]
    NotFound,
    #[error("No items found")]
    NoRecordsFound,
    #[error(transparent)]
    Unclassified(#[from] StoreError),
}

impl ServiceError {
    /// Status the error is meant to surface as.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            // Kept as 401 for compatibility with existing clients.
            ServiceError::NoRecordsFound => StatusCode::UNAUTHORIZED,
            ServiceError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wording of the generic 500 body. Create answers with title case, every other endpoint with sentence case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wording {
    Create,
    Other,
}

impl Wording {
    pub fn internal_error(self) -> &'static str {
        match self {
            Wording::Create => "Internal Server Error",
            Wording::Other => "Internal server error",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Payload failed the create schema; every issue is reported.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldIssue>),
    /// Path identifier failed validation; carries the first issue only.
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{source}")]
    Service {
        source: ServiceError,
        wording: Wording,
    },
    #[error("route not found")]
    RouteNotFound,
    /// Failure that bypassed handler error mapping.
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn service(source: ServiceError, wording: Wording) -> Self {
        AppError::Service { source, wording }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Service { source, .. } => source.status(),
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(messages) => {
                tracing::debug!(issues = messages.len(), "payload rejected");
                serde_json::json!({ "error": "Credentials error", "messages": messages })
            }
            AppError::BadRequest(message) => {
                tracing::debug!(%message, "identifier rejected");
                error_body(&message)
            }
            AppError::Service { source, wording } => match source {
                ServiceError::NotFound => error_body("Item not found!"),
                ServiceError::NoRecordsFound => error_body("There are no items registered"),
                ServiceError::Unclassified(e) => {
                    tracing::error!(error = %e, "store failure");
                    error_body(wording.internal_error())
                }
            },
            AppError::RouteNotFound => serde_json::json!({ "message": "Route not found" }),
            AppError::Unexpected(detail) => {
                tracing::error!(%detail, "unexpected failure");
                unexpected_body()
            }
        };
        (status, Json(body)).into_response()
    }
}
