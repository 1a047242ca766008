//! Entity descriptor for Dish

use super::model::Dish;
use crate::core::resource::Resource;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::exposure::rest::handlers;
use axum::{
    Router,
    routing::{MethodRouter, get},
};
use std::sync::Arc;

/// Routes for the dish collection
pub struct DishDescriptor {
    pub resource: Arc<Resource<Dish>>,
}

impl DishDescriptor {
    pub fn new(resource: Arc<Resource<Dish>>) -> Self {
        Self { resource }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn routes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GET", "/dishes".to_string()),
            ("POST", "/dishes".to_string()),
            ("GET", "/dishes/{dishId}".to_string()),
            ("PUT", "/dishes/{dishId}".to_string()),
        ]
    }

    fn build_routes(&self) -> Router {
        let collection: MethodRouter<Arc<Resource<Dish>>> = get(handlers::list::<Dish>)
            .post(handlers::create::<Dish>)
            .fallback(handlers::method_not_allowed);
        let item: MethodRouter<Arc<Resource<Dish>>> = get(handlers::read::<Dish>)
            .put(handlers::update::<Dish>)
            .fallback(handlers::method_not_allowed);

        Router::new()
            .route("/dishes", collection)
            .route("/dishes/{dishId}", item)
            .with_state(self.resource.clone())
    }
}
