//! Restaurant ordering API: restaurants, menu items, customers and orders over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use openapi::ApiDoc;
pub use routes::{api_routes, app, common_routes_with_ready};
pub use service::{CustomerService, MenuItemService, OrderService, RestaurantService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
