//! Store accessor trait for resource collections

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// An entity found in its collection, together with its position
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub index: usize,
    pub entity: T,
}

/// Ordered collection of one entity type
///
/// Lookups are linear scans by identifier. Positions returned by `find` are
/// only meaningful until the next removal; `replace_at` and `remove_at`
/// refuse to act when the position no longer holds the expected entity.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Find an entity by ID
    async fn find(&self, id: &str) -> Result<Option<Resolved<T>>>;

    /// List all entities in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Append a new entity at the end of the collection
    async fn append(&self, entity: T) -> Result<T>;

    /// Overwrite the entity at `index` (must carry the same id)
    async fn replace_at(&self, index: usize, entity: T) -> Result<T>;

    /// Remove the entity at `index` (must carry `id`)
    async fn remove_at(&self, index: usize, id: &str) -> Result<T>;
}
