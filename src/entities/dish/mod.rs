//! Dish entity module

pub mod descriptor;
pub mod model;
pub mod pipeline;

pub use descriptor::DishDescriptor;
pub use model::Dish;
pub use pipeline::pipelines;
