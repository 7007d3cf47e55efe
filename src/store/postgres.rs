//! PostgreSQL item store over a sqlx pool.

use super::ItemStore;
use crate::error::StoreError;
use crate::migration::ITEMS_TABLE;
use crate::model::{Item, ItemId, NewItem};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, data: &NewItem) -> Result<Item, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, description) VALUES ($1, $2) RETURNING {}",
            ITEMS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(&data.name)
            .bind(&data.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, ITEMS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let items = sqlx::query_as::<_, Item>(&sql).fetch_all(&self.pool).await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ITEMS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn update(&self, id: ItemId, data: &NewItem) -> Result<Item, StoreError> {
        let sql = format!(
            "UPDATE {} SET name = $1, description = $2, updated_at = NOW() WHERE id = $3 RETURNING {}",
            ITEMS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Item>(&sql)
            .bind(&data.name)
            .bind(&data.description)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RecordNotFound)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", ITEMS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
