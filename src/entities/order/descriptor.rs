//! Entity descriptor for Order

use super::model::Order;
use crate::core::resource::Resource;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::exposure::rest::handlers;
use axum::{
    Router,
    routing::{MethodRouter, get},
};
use std::sync::Arc;

/// Routes for the order collection
pub struct OrderDescriptor {
    pub resource: Arc<Resource<Order>>,
}

impl OrderDescriptor {
    pub fn new(resource: Arc<Resource<Order>>) -> Self {
        Self { resource }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn routes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GET", "/orders".to_string()),
            ("POST", "/orders".to_string()),
            ("GET", "/orders/{orderId}".to_string()),
            ("PUT", "/orders/{orderId}".to_string()),
            ("DELETE", "/orders/{orderId}".to_string()),
        ]
    }

    fn build_routes(&self) -> Router {
        let collection: MethodRouter<Arc<Resource<Order>>> = get(handlers::list::<Order>)
            .post(handlers::create::<Order>)
            .fallback(handlers::method_not_allowed);
        let item: MethodRouter<Arc<Resource<Order>>> = get(handlers::read::<Order>)
            .put(handlers::update::<Order>)
            .delete(handlers::delete::<Order>)
            .fallback(handlers::method_not_allowed);

        Router::new()
            .route("/orders", collection)
            .route("/orders/{orderId}", item)
            .with_state(self.resource.clone())
    }
}
