//! Response body helpers shared by handlers and the error mapping.

use serde::Serialize;
use utoipa::ToSchema;

/// One violated constraint: the offending field and its message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldIssue {
    pub field: String,
    pub error: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

/// Body of a 400 on the create schema.
#[derive(Serialize, ToSchema)]
pub struct CredentialsErrorBody {
    pub error: String,
    pub messages: Vec<FieldIssue>,
}

/// `{"error": message}`, the shape of every handled failure.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

/// Body for failures that escaped handler error mapping.
pub fn unexpected_body() -> serde_json::Value {
    serde_json::json!({
        "error": "Internal Server Error",
        "message": "An unexpected error occurred"
    })
}
