//! In-memory implementation of DataService

use crate::core::error::StorageError;
use crate::core::{DataService, Entity, Resolved};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store backed by a flat, ordered `Vec`
///
/// Contents live only for the lifetime of the process.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store seeded with `items`, kept in the given order
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    fn check_position(items: &[T], index: usize, id: &str) -> Result<()> {
        match items.get(index) {
            Some(current) if current.id() == id => Ok(()),
            _ => Err(anyhow::Error::new(StorageError::StalePosition {
                index,
                expected_id: id.to_string(),
            })),
        }
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryStore<T> {
    async fn find(&self, id: &str) -> Result<Option<Resolved<T>>> {
        let items = self.items.read().await;

        Ok(items
            .iter()
            .position(|item| item.id() == id)
            .map(|index| Resolved {
                index,
                entity: items[index].clone(),
            }))
    }

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn append(&self, entity: T) -> Result<T> {
        self.items.write().await.push(entity.clone());
        Ok(entity)
    }

    async fn replace_at(&self, index: usize, entity: T) -> Result<T> {
        let mut items = self.items.write().await;
        Self::check_position(&items, index, entity.id())?;

        items[index] = entity.clone();
        Ok(entity)
    }

    async fn remove_at(&self, index: usize, id: &str) -> Result<T> {
        let mut items = self.items.write().await;
        Self::check_position(&items, index, id)?;

        Ok(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Dish;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: "d".to_string(),
            price: 5.0,
            image_url: "u".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_then_find() {
        let store = InMemoryStore::new();
        store.append(dish("a", "Taco")).await.unwrap();
        store.append(dish("b", "Burrito")).await.unwrap();

        let found = store.find("b").await.unwrap().expect("should find b");
        assert_eq!(found.index, 1);
        assert_eq!(found.entity.name, "Burrito");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store: InMemoryStore<Dish> = InMemoryStore::new();
        assert!(store.find("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryStore::with_items(vec![dish("z", "Z"), dish("a", "A")]);
        store.append(dish("m", "M")).await.unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_replace_at() {
        let store = InMemoryStore::with_items(vec![dish("a", "Taco")]);
        store.replace_at(0, dish("a", "Nacho")).await.unwrap();

        assert_eq!(store.find("a").await.unwrap().unwrap().entity.name, "Nacho");
    }

    #[tokio::test]
    async fn test_replace_at_rejects_other_id() {
        let store = InMemoryStore::with_items(vec![dish("a", "Taco")]);
        let err = store.replace_at(0, dish("b", "Nacho")).await.unwrap_err();

        assert!(err.downcast_ref::<StorageError>().is_some());
        assert_eq!(store.find("a").await.unwrap().unwrap().entity.name, "Taco");
    }

    #[tokio::test]
    async fn test_remove_at() {
        let store = InMemoryStore::with_items(vec![dish("a", "A"), dish("b", "B")]);
        let removed = store.remove_at(0, "a").await.unwrap();

        assert_eq!(removed.id, "a");
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert_eq!(store.find("b").await.unwrap().unwrap().index, 0);
    }

    #[tokio::test]
    async fn test_remove_at_stale_position() {
        let store = InMemoryStore::with_items(vec![dish("a", "A")]);
        assert!(store.remove_at(0, "b").await.is_err());
        assert!(store.remove_at(5, "a").await.is_err());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
