//! Item domain service: existence checks and typed errors over an [`ItemStore`].

use crate::error::{ServiceError, StoreError};
use crate::model::{Item, ItemId, NewItem};
use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    pub async fn create(&self, item: &NewItem) -> Result<Item, ServiceError> {
        let created = self.store.create(item).await?;
        tracing::info!(id = created.id, "item created");
        Ok(created)
    }

    /// All items. An empty store is an error, not an empty list.
    pub async fn list_all(&self) -> Result<Vec<Item>, ServiceError> {
        let items = self.store.find_all().await?;
        if items.is_empty() {
            return Err(ServiceError::NoRecordsFound);
        }
        Ok(items)
    }

    pub async fn get_by_id(&self, id: ItemId) -> Result<Item, ServiceError> {
        self.store.find_by_id(id).await?.ok_or(ServiceError::NotFound)
    }

    /// Handlers pre-check existence too; a row deleted in between still maps to NotFound here.
    pub async fn update(&self, id: ItemId, data: &NewItem) -> Result<Item, ServiceError> {
        match self.store.update(id, data).await {
            Ok(item) => {
                tracing::info!(id, "item updated");
                Ok(item)
            }
            Err(StoreError::RecordNotFound) => Err(ServiceError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Confirms the row exists before asking the store to delete it.
    pub async fn delete(&self, id: ItemId) -> Result<(), ServiceError> {
        self.get_by_id(id).await?;
        self.store.delete(id).await?;
        tracing::info!(id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryItemStore;
    use async_trait::async_trait;

    fn service() -> ItemService {
        ItemService::new(Arc::new(MemoryItemStore::new()))
    }

    fn lamp() -> NewItem {
        NewItem {
            name: "Lamp".into(),
            description: Some("A reading lamp with a warm white bulb included".into()),
        }
    }

    /// Store whose every call fails like a dropped connection.
    struct BrokenStore;

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

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create(&lamp()).await.unwrap();
        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Lamp");
    }

    #[tokio::test]
    async fn list_all_on_empty_store_is_no_records() {
        let err = service().list_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::NoRecordsFound));
    }

    #[tokio::test]
    async fn list_all_returns_every_item() {
        let svc = service();
        svc.create(&lamp()).await.unwrap();
        svc.create(&lamp()).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        assert!(matches!(service().get_by_id(9).await, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        assert!(matches!(service().update(9, &lamp()).await, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn delete_checks_existence_first() {
        let svc = service();
        assert!(matches!(svc.delete(9).await, Err(ServiceError::NotFound)));
        let created = svc.create(&lamp()).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get_by_id(created.id).await, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn store_failures_are_unclassified() {
        let svc = ItemService::new(Arc::new(BrokenStore));
        assert!(matches!(svc.create(&lamp()).await, Err(ServiceError::Unclassified(_))));
        assert!(matches!(svc.list_all().await, Err(ServiceError::Unclassified(_))));
        assert!(matches!(svc.get_by_id(1).await, Err(ServiceError::Unclassified(_))));
        assert!(matches!(svc.update(1, &lamp()).await, Err(ServiceError::Unclassified(_))));
        assert!(matches!(svc.delete(1).await, Err(ServiceError::Unclassified(_))));
    }
}
