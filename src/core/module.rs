//! Module system
//!
//! A module groups the resources of one service and registers their
//! descriptors with the server.

use crate::core::error::GrubResult;
use crate::server::entity_registry::EntityRegistry;

/// A group of resources served together
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register every entity descriptor of this module
    fn register_entities(&self, registry: &mut EntityRegistry) -> GrubResult<()>;
}
