//! HTTP handlers for restaurants, menu items, customers, and orders.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub use customer::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
