//! Transport-agnostic operations on one resource
//!
//! A [`Resource`] owns the pipelines guarding each route and the terminal
//! mutator that runs once a pipeline passes in full:
//!
//! ```text
//! request ─▶ Pipeline (stage, stage, ...) ─▶ mutator ─▶ entity / collection
//!                 │ first failure
//!                 └──────────────▶ GrubError (nothing written)
//! ```

use crate::core::error::{EntityError, GrubError, GrubResult, StorageError};
use crate::core::merge::{build_entity, merge_update};
use crate::core::validation::{Pipeline, RequestContext};
use crate::core::{DataService, Entity, IdGenerator, Resolved};
use serde_json::Value;
use std::sync::Arc;

/// The pipeline attached to each route of a resource
pub struct Pipelines<T> {
    pub create: Pipeline<T>,
    pub read: Pipeline<T>,
    pub update: Pipeline<T>,
    /// `None` when the resource cannot be deleted
    pub delete: Option<Pipeline<T>>,
}

/// One resource collection with its pipelines and mutators
pub struct Resource<T: Entity> {
    store: Arc<dyn DataService<T>>,
    ids: Arc<dyn IdGenerator>,
    pipelines: Pipelines<T>,
}

impl<T: Entity> Resource<T> {
    pub fn new(
        store: Arc<dyn DataService<T>>,
        ids: Arc<dyn IdGenerator>,
        pipelines: Pipelines<T>,
    ) -> Self {
        Self {
            store,
            ids,
            pipelines,
        }
    }

    /// Every entity, unfiltered, in creation order
    pub async fn list(&self) -> GrubResult<Vec<T>> {
        Ok(self.store.list().await?)
    }

    /// Validate `body`, assign a fresh id and append the new entity
    pub async fn create(&self, body: Value) -> GrubResult<T> {
        let ctx = self
            .pipelines
            .create
            .run(RequestContext::from_body(body), self.store.as_ref())
            .await?;
        let (payload, _) = ctx.into_parts();

        let entity: T = build_entity(self.ids.next_id(), payload)?;
        let entity = self.store.append(entity).await?;

        tracing::info!(
            entity_type = T::resource_name_singular(),
            id = entity.id(),
            "entity created"
        );
        Ok(entity)
    }

    /// The entity identified by `id`
    pub async fn read(&self, id: &str) -> GrubResult<T> {
        let ctx = self
            .pipelines
            .read
            .run(RequestContext::empty().with_route_id(id), self.store.as_ref())
            .await?;
        let (_, resolved) = ctx.into_parts();

        Ok(Self::require_resolved(resolved)?.entity)
    }

    /// Validate `body` and merge it into the entity identified by `id`
    pub async fn update(&self, id: &str, body: Value) -> GrubResult<T> {
        let ctx = self
            .pipelines
            .update
            .run(
                RequestContext::from_body(body).with_route_id(id),
                self.store.as_ref(),
            )
            .await?;
        let (payload, resolved) = ctx.into_parts();
        let resolved = Self::require_resolved(resolved)?;

        let merged = merge_update(&resolved.entity, &payload)?;
        let entity = match self.store.replace_at(resolved.index, merged.entity.clone()).await {
            Ok(entity) => entity,
            Err(err) => {
                let index = self.relocate(id, err).await?;
                self.store.replace_at(index, merged.entity).await?
            }
        };

        tracing::info!(
            entity_type = T::resource_name_singular(),
            id = entity.id(),
            changed = ?merged.changed,
            "entity updated"
        );
        Ok(entity)
    }

    /// Remove the entity identified by `id`
    pub async fn delete(&self, id: &str) -> GrubResult<()> {
        let pipeline = self.pipelines.delete.as_ref().ok_or_else(|| {
            GrubError::Internal(format!(
                "{} cannot be deleted",
                T::resource_name()
            ))
        })?;

        let ctx = pipeline
            .run(RequestContext::empty().with_route_id(id), self.store.as_ref())
            .await?;
        let (_, resolved) = ctx.into_parts();
        let resolved = Self::require_resolved(resolved)?;

        if let Err(err) = self.store.remove_at(resolved.index, id).await {
            let index = self.relocate(id, err).await?;
            self.store.remove_at(index, id).await?;
        }

        tracing::info!(
            entity_type = T::resource_name_singular(),
            id = id,
            "entity deleted"
        );
        Ok(())
    }

    /// Position of `id` after a mutation found it moved
    ///
    /// Only a stale position is recovered from. An entity removed in the
    /// meantime reports `404`.
    async fn relocate(&self, id: &str, err: anyhow::Error) -> GrubResult<usize> {
        let Some(StorageError::StalePosition { index, .. }) = err.downcast_ref::<StorageError>()
        else {
            return Err(err.into());
        };
        tracing::warn!(
            entity_type = T::resource_name_singular(),
            id = id,
            stale_index = *index,
            "entity moved before write, resolving again"
        );

        match self.store.find(id).await? {
            Some(resolved) => Ok(resolved.index),
            None => Err(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id: id.to_string(),
                message: T::not_found_message(id),
            }
            .into()),
        }
    }

    fn require_resolved(resolved: Option<Resolved<T>>) -> GrubResult<Resolved<T>> {
        resolved.ok_or_else(|| {
            GrubError::Internal(format!(
                "{} pipeline did not resolve an entity",
                T::resource_name_singular()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIdGenerator;
    use crate::core::validation::{FieldStage, ResolveById};
    use crate::entities::Dish;
    use crate::storage::InMemoryStore;
    use serde_json::json;

    fn bare_resource(delete: bool) -> Resource<Dish> {
        Resource::new(
            Arc::new(InMemoryStore::<Dish>::new()),
            Arc::new(SequentialIdGenerator::new("d")),
            Pipelines {
                create: Pipeline::new().stage(FieldStage::required_text("name", "name!")),
                read: Pipeline::new().stage(ResolveById),
                update: Pipeline::new().stage(ResolveById),
                delete: delete.then(|| Pipeline::new().stage(ResolveById)),
            },
        )
    }

    fn taco_body() -> Value {
        json!({"data": {"name": "Taco", "description": "d", "price": 5, "image_url": "u"}})
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let resource = bare_resource(false);
        let created = resource.create(taco_body()).await.unwrap();
        assert_eq!(created.id, "d1");

        let read = resource.read("d1").await.unwrap();
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn test_failed_pipeline_writes_nothing() {
        let resource = bare_resource(false);
        let err = resource
            .create(json!({"data": {"description": "d", "price": 5, "image_url": "u"}}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "name!");
        assert!(resource.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges() {
        let resource = bare_resource(false);
        resource.create(taco_body()).await.unwrap();

        let updated = resource
            .update("d1", json!({"data": {"name": "Nacho"}}))
            .await
            .unwrap();
        assert_eq!(updated.name, "Nacho");
        assert_eq!(resource.read("d1").await.unwrap().name, "Nacho");
    }

    #[tokio::test]
    async fn test_delete_without_pipeline_is_internal_error() {
        let resource = bare_resource(false);
        resource.create(taco_body()).await.unwrap();

        assert!(matches!(
            resource.delete("d1").await,
            Err(GrubError::Internal(_))
        ));
        assert_eq!(resource.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes() {
        let resource = bare_resource(true);
        resource.create(taco_body()).await.unwrap();
        resource.delete("d1").await.unwrap();

        assert!(resource.read("d1").await.is_err());
    }

    /// Store whose first lookup is followed by the removal of `evicted`,
    /// as if another request deleted it in between
    struct ShiftingStore {
        inner: InMemoryStore<Dish>,
        evicted: &'static str,
        shifted: tokio::sync::Mutex<bool>,
    }

    #[async_trait::async_trait]
    impl DataService<Dish> for ShiftingStore {
        async fn find(&self, id: &str) -> anyhow::Result<Option<Resolved<Dish>>> {
            let found = self.inner.find(id).await?;
            let mut shifted = self.shifted.lock().await;
            if !*shifted {
                *shifted = true;
                if let Some(other) = self.inner.find(self.evicted).await? {
                    self.inner.remove_at(other.index, self.evicted).await?;
                }
            }
            Ok(found)
        }

        async fn list(&self) -> anyhow::Result<Vec<Dish>> {
            self.inner.list().await
        }

        async fn append(&self, entity: Dish) -> anyhow::Result<Dish> {
            self.inner.append(entity).await
        }

        async fn replace_at(&self, index: usize, entity: Dish) -> anyhow::Result<Dish> {
            self.inner.replace_at(index, entity).await
        }

        async fn remove_at(&self, index: usize, id: &str) -> anyhow::Result<Dish> {
            self.inner.remove_at(index, id).await
        }
    }

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: "d".to_string(),
            price: 5.0,
            image_url: "u".to_string(),
        }
    }

    fn shifting_resource(evicted: &'static str) -> (Resource<Dish>, Arc<ShiftingStore>) {
        let store = Arc::new(ShiftingStore {
            inner: InMemoryStore::with_items(vec![
                dish("a", "A"),
                dish("b", "B"),
                dish("c", "C"),
            ]),
            evicted,
            shifted: tokio::sync::Mutex::new(false),
        });
        let resource = Resource::new(
            store.clone(),
            Arc::new(SequentialIdGenerator::new("d")),
            Pipelines {
                create: Pipeline::new(),
                read: Pipeline::new().stage(ResolveById),
                update: Pipeline::new().stage(ResolveById),
                delete: Some(Pipeline::new().stage(ResolveById)),
            },
        );
        (resource, store)
    }

    #[tokio::test]
    async fn test_update_after_earlier_entity_removed() {
        let (resource, store) = shifting_resource("a");

        let updated = resource
            .update("c", json!({"data": {"name": "Nacho"}}))
            .await
            .unwrap();
        assert_eq!(updated.id, "c");

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["B", "Nacho"]);
    }

    #[tokio::test]
    async fn test_delete_after_earlier_entity_removed() {
        let (resource, store) = shifting_resource("a");

        resource.delete("c").await.unwrap();

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_delete_after_target_removed_is_not_found() {
        let (resource, store) = shifting_resource("c");

        let err = resource.delete("c").await.unwrap_err();
        assert!(matches!(err, GrubError::Entity(EntityError::NotFound { .. })));
        assert_eq!(err.to_string(), "Dish does not exist: c.");
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
