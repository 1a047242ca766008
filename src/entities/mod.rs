//! Entities module - the dish catalog and customer orders

pub mod dish;
pub mod order;

// Re-export models for convenience
pub use dish::{Dish, DishDescriptor};
pub use order::{DishLine, Order, OrderDescriptor, OrderStatus};
