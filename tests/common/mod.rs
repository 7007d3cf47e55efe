#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use item_service::{app, AppState, Item, ItemId, ItemStore, MemoryItemStore, NewItem, StoreError};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

pub const BODY_LIMIT: usize = 16 * 1024;

pub const LONG_DESCRIPTION: &str = "A reading lamp with a warm white bulb and a fabric shade";

pub fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryItemStore::new())), BODY_LIMIT)
}

pub fn app_with_store(store: Arc<dyn ItemStore>) -> Router {
    app(AppState::new(store), BODY_LIMIT)
}

/// Store whose every call fails like a dropped connection.
pub struct BrokenStore;

#[async_trait]
impl ItemStore for BrokenStore {
    async fn create(&self, _: &NewItem) -> Result<Item, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn find_by_id(&self, _: ItemId) -> Result<Option<Item>, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn update(&self, _: ItemId, _: &NewItem) -> Result<Item, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn delete(&self, _: ItemId) -> Result<(), StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
}

/// Store that finds rows but fails every write, to reach the 500 paths behind the existence checks.
pub struct ReadOnlyStore {
    pub inner: MemoryItemStore,
}

#[async_trait]
impl ItemStore for ReadOnlyStore {
    async fn create(&self, data: &NewItem) -> Result<Item, StoreError> {
        self.inner.create(data).await
    }
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        self.inner.find_all().await
    }
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.inner.find_by_id(id).await
    }
    async fn update(&self, _: ItemId, _: &NewItem) -> Result<Item, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }
    async fn delete(&self, _: ItemId) -> Result<(), StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return (status, None);
    }
    (status, Some(serde_json::from_slice(&bytes).unwrap()))
}
