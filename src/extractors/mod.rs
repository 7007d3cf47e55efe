//! Request extractors that reject with [`AppError`](crate::error::AppError).

pub mod body;
pub mod item_id;

pub use body::JsonBody;
pub use item_id::ItemIdParam;
