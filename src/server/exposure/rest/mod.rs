//! REST API exposure
//!
//! Assembles the health routes, every registered resource and any custom
//! routes into one Axum `Router`, with the shared fallback and middleware.

pub mod handlers;

use crate::config::ServerConfig;
use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Resource routes (with a `405` fallback per known path)
    /// - Custom routes
    /// - A `404` fallback for every other path
    pub fn build_router(
        registry: &EntityRegistry,
        custom_routes: Vec<Router>,
        config: &ServerConfig,
    ) -> Router {
        let mut app = Self::health_routes().merge(registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        let app = app.fallback(handlers::path_not_found);

        let app = if config.cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        };

        app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    fn health_routes() -> Router {
        Router::new()
            .route(
                "/health",
                get(Self::health_check).fallback(handlers::method_not_allowed),
            )
            .route(
                "/healthz",
                get(Self::health_check).fallback(handlers::method_not_allowed),
            )
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "grubdash"
        }))
    }
}
