//! Routing table and the top-level application router.

pub mod common;
pub mod docs;
pub mod items;

pub use common::common_routes_with_ready;
pub use docs::{docs_routes, ApiDoc};
pub use items::{item_routes, ITEMS_PATH};

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Response, response::IntoResponse, Router};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Fallback for any path or method without a route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<axum::body::Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic".to_string()
    };
    AppError::Unexpected(detail).into_response()
}

/// Full service: item, common and docs routes with CORS, tracing, body limit and panic recovery.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(item_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .merge(docs_routes())
        .fallback(route_not_found)
        // Enforced by the body extractors, so overflow surfaces as an unexpected failure.
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}
