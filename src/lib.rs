//! Item service: validated CRUD over a single `items` resource.
//!
//! Requests flow handler → validation → [`ItemService`] → [`ItemStore`]; each layer maps
//! failures into its own error type, and [`AppError`] turns them into HTTP responses.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError, ServiceError, StoreError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Item, ItemId, NewItem};
pub use response::FieldIssue;
pub use routes::{app, common_routes_with_ready, docs_routes, item_routes};
pub use service::{ItemService, ItemValidator};
pub use state::AppState;
pub use store::{ItemStore, MemoryItemStore, PgItemStore};
