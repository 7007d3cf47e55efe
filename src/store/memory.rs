//! In-process item store. Ids come from a counter and are never reused.

use super::ItemStore;
use crate::error::StoreError;
use crate::model::{Item, ItemId, NewItem};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: ItemId,
    rows: BTreeMap<ItemId, Item>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, data: &NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let item = Item {
            id: inner.last_id,
            name: data.name.clone(),
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: ItemId, data: &NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or(StoreError::RecordNotFound)?;
        row.name = data.name.clone();
        row.description = data.description.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RecordNotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> NewItem {
        NewItem {
            name: "Lamp".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryItemStore::new();
        let a = store.create(&lamp()).await.unwrap();
        let b = store.create(&lamp()).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryItemStore::new();
        let a = store.create(&lamp()).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.create(&lamp()).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing_rows() {
        let store = MemoryItemStore::new();
        assert!(store.find_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_fail_for_missing_rows() {
        let store = MemoryItemStore::new();
        assert!(matches!(store.update(7, &lamp()).await, Err(StoreError::RecordNotFound)));
        assert!(matches!(store.delete(7).await, Err(StoreError::RecordNotFound)));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_created_at() {
        let store = MemoryItemStore::new();
        let a = store.create(&lamp()).await.unwrap();
        let changed = NewItem {
            name: "Desk lamp".into(),
            description: Some("x".repeat(40)),
        };
        let b = store.update(a.id, &changed).await.unwrap();
        assert_eq!(b.name, "Desk lamp");
        assert_eq!(b.created_at, a.created_at);
        assert!(b.updated_at >= a.updated_at);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = MemoryItemStore::new();
        for _ in 0..3 {
            store.create(&lamp()).await.unwrap();
        }
        let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
