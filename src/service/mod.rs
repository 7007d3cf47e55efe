//! ItemService and request validation.

mod items;
mod validation;
pub use items::ItemService;
pub use validation::{ItemValidator, StringRule, CREATE_SCHEMA, ID_NOT_A_NUMBER, ID_REQUIRED};
