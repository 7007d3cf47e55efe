//! HTTP handlers for item CRUD.

pub mod items;
pub use items::*;
