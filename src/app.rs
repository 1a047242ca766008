//! The GrubDash module: dishes and orders wired to their stores

use crate::config::{AppConfig, SeedData};
use crate::core::error::GrubResult;
use crate::core::{DataService, IdGenerator, Module, Resource, UuidIdGenerator};
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor, dish, order};
use crate::server::{EntityRegistry, ServerBuilder};
use crate::storage::InMemoryStore;
use axum::Router;
use std::sync::Arc;

pub struct GrubDashModule {
    dishes: Arc<Resource<Dish>>,
    orders: Arc<Resource<Order>>,
}

impl GrubDashModule {
    pub fn new(
        dish_store: Arc<dyn DataService<Dish>>,
        order_store: Arc<dyn DataService<Order>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            dishes: Arc::new(Resource::new(dish_store, ids.clone(), dish::pipelines())),
            orders: Arc::new(Resource::new(order_store, ids, order::pipelines())),
        }
    }

    /// In-memory stores preloaded with `seed`, random ids
    pub fn from_seed(seed: &SeedData) -> Self {
        Self::with_ids(seed, Arc::new(UuidIdGenerator))
    }

    /// In-memory stores preloaded with `seed`, ids from `ids`
    pub fn with_ids(seed: &SeedData, ids: Arc<dyn IdGenerator>) -> Self {
        Self::new(
            Arc::new(InMemoryStore::with_items(seed.dishes.clone())),
            Arc::new(InMemoryStore::with_items(seed.orders.clone())),
            ids,
        )
    }

    pub fn dishes(&self) -> &Arc<Resource<Dish>> {
        &self.dishes
    }

    pub fn orders(&self) -> &Arc<Resource<Order>> {
        &self.orders
    }
}

impl Module for GrubDashModule {
    fn name(&self) -> &str {
        "grubdash"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["dish", "order"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) -> GrubResult<()> {
        registry.register(Box::new(DishDescriptor::new(self.dishes.clone())))?;
        registry.register(Box::new(OrderDescriptor::new(self.orders.clone())))?;
        Ok(())
    }
}

/// Full application router for `config`
pub fn router(config: &AppConfig) -> anyhow::Result<Router> {
    ServerBuilder::new()
        .with_server_config(config.server.clone())
        .register_module(GrubDashModule::from_seed(&config.seed))?
        .build()
}
