//! Core module containing the resource abstractions and request pipelines

pub mod entity;
pub mod error;
pub mod id;
pub mod merge;
pub mod module;
pub mod resource;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{GrubError, GrubResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use merge::{Merged, build_entity, merge_update};
pub use module::Module;
pub use resource::{Pipelines, Resource};
pub use service::{DataService, Resolved};
