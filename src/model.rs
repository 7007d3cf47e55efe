//! Item record and the payloads that create or change it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier type of the `items.id` SERIAL column.
pub type ItemId = i32;

/// A persisted item. `id` and both timestamps are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a create or a full update.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewItem {
    /// 3 to 60 characters.
    pub name: String,
    /// 35 to 255 characters when present.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body of `PUT /api/items/:id`. Falsy fields keep the stored value.
#[derive(Deserialize, ToSchema)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}
