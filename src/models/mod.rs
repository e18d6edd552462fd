//! Entities as stored and served, plus the request bodies that create or replace them.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use customer::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
