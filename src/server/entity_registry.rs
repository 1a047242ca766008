//! Entity registry collecting the route tables of every resource

use crate::core::error::{ConfigError, GrubResult};
use axum::Router;

/// Trait that describes how to expose one resource over HTTP
///
/// Each entity (Dish, Order) implements this to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form used in paths (e.g., "orders")
    fn plural(&self) -> &str;

    /// `(method, path)` pairs served by [`build_routes`](Self::build_routes)
    fn routes(&self) -> Vec<(&'static str, String)>;

    /// Build the routes for this entity
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application, in registration order
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// Two descriptors for the same entity type, or the same path prefix,
    /// would produce overlapping routes and are refused.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) -> GrubResult<()> {
        let clash = self.descriptors.iter().any(|existing| {
            existing.entity_type() == descriptor.entity_type()
                || existing.plural() == descriptor.plural()
        });
        if clash {
            return Err(ConfigError::InvalidValue {
                field: "entity_type".to_string(),
                value: descriptor.entity_type().to_string(),
                message: "entity type registered twice".to_string(),
            }
            .into());
        }

        tracing::debug!(
            entity_type = descriptor.entity_type(),
            plural = descriptor.plural(),
            "registered entity"
        );
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }

    /// Every `(method, path)` pair served, grouped by entity
    pub fn route_table(&self) -> Vec<(&'static str, String)> {
        self.descriptors.iter().flat_map(|d| d.routes()).collect()
    }
}
