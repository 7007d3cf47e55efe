//! Persistence adapter for items. Direct translation to store operations; no existence pre-checks.

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

use crate::error::StoreError;
use crate::model::{Item, ItemId, NewItem};
use async_trait::async_trait;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a row; the store assigns id and timestamps.
    async fn create(&self, data: &NewItem) -> Result<Item, StoreError>;

    /// All rows ordered by id. May be empty.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    /// One row by id, or None. Never fails for a missing row.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Overwrite name and description and refresh `updated_at`.
    /// Fails with [`StoreError::RecordNotFound`] when no row has this id.
    async fn update(&self, id: ItemId, data: &NewItem) -> Result<Item, StoreError>;

    /// Fails with [`StoreError::RecordNotFound`] when no row has this id.
    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    /// Round-trips to the backing store; used by `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}
