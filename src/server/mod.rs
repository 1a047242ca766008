//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers the routes of every
//! resource declared in a module, plus health checks and fallbacks.

pub mod builder;
pub mod entity_registry;
pub mod exposure;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
