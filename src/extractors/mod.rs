//! Request extractors that reject with `AppError`, so every failure shares one error body shape.

mod id;
mod json;
mod query;

pub use id::EntityId;
pub use json::ApiJson;
pub use query::ApiQuery;
