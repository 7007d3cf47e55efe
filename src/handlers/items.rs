//! Item CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, Wording};
use crate::extractors::{ItemIdParam, JsonBody};
use crate::model::{Item, ItemChanges, NewItem};
use crate::response::{CredentialsErrorBody, ErrorBody};
use crate::service::ItemValidator;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value};

/// Create an item.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Payload failed validation", body = CredentialsErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemValidator::validate_create(&body).map_err(AppError::Validation)?;
    let created = state
        .items
        .create(&item)
        .await
        .map_err(|e| AppError::service(e, Wording::Create))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List every item.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 401, description = "No items registered", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state
        .items
        .list_all()
        .await
        .map_err(|e| AppError::service(e, Wording::Other))?;
    Ok((StatusCode::OK, Json(items)))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ItemIdParam(id): ItemIdParam,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .items
        .get_by_id(id)
        .await
        .map_err(|e| AppError::service(e, Wording::Other))?;
    Ok((StatusCode::OK, Json(item)))
}

/// Update an item. Falsy or missing fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    request_body = ItemChanges,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 400, description = "Invalid id or payload", body = CredentialsErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ItemIdParam(id): ItemIdParam,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .items
        .get_by_id(id)
        .await
        .map_err(|e| AppError::service(e, Wording::Other))?;
    let merged = merge_changes(&existing, &body);
    let changes = ItemValidator::validate_create(&merged).map_err(AppError::Validation)?;
    let updated = state
        .items
        .update(id, &changes)
        .await
        .map_err(|e| AppError::service(e, Wording::Other))?;
    Ok((StatusCode::OK, Json(updated)))
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ItemIdParam(id): ItemIdParam,
) -> Result<impl IntoResponse, AppError> {
    state
        .items
        .delete(id)
        .await
        .map_err(|e| AppError::service(e, Wording::Other))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Overlay the incoming `name`/`description` on the stored item. Any falsy incoming value
/// (`null`, `false`, `0`, `""`, missing) falls back to the stored one.
fn merge_changes(existing: &Item, body: &Value) -> Value {
    let incoming = |field: &str| body.get(field).filter(|v| is_truthy(v)).cloned();
    let mut merged = Map::new();
    merged.insert(
        "name".into(),
        incoming("name").unwrap_or_else(|| Value::String(existing.name.clone())),
    );
    if let Some(description) = incoming("description").or_else(|| existing.description.clone().map(Value::String)) {
        merged.insert("description".into(), description);
    }
    Value::Object(merged)
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
