//! Item CRUD routes under `/api/items`.
//! Every path also answers with a trailing slash; other methods on a known path fall through to the 404 fallback.

use crate::handlers::items::{create, delete as delete_handler, list, read, update};
use crate::routes::route_not_found;
use crate::state::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};

pub const ITEMS_PATH: &str = "/api/items";

fn collection() -> MethodRouter<AppState> {
    get(list).post(create).fallback(route_not_found)
}

fn member() -> MethodRouter<AppState> {
    get(read).put(update).delete(delete_handler).fallback(route_not_found)
}

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route(ITEMS_PATH, collection())
        .route(&format!("{}/", ITEMS_PATH), collection())
        .route(&format!("{}/:id", ITEMS_PATH), member())
        .route(&format!("{}/:id/", ITEMS_PATH), member())
        .with_state(state)
}
