//! OpenAPI document for the item endpoints, served as JSON.

use crate::handlers::items;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(items::create, items::list, items::read, items::update, items::delete),
    components(schemas(
        crate::model::Item,
        crate::model::NewItem,
        crate::model::ItemChanges,
        crate::response::FieldIssue,
        crate::response::CredentialsErrorBody,
        crate::response::ErrorBody
    )),
    tags((name = "items", description = "Item management")),
    info(title = "Item Service API", description = "CRUD API for items")
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs.json", get(openapi_json))
}
