//! Order entity module

pub mod descriptor;
pub mod model;
pub mod pipeline;
pub mod stages;

pub use descriptor::OrderDescriptor;
pub use model::{DishLine, Order, OrderStatus};
pub use pipeline::pipelines;
