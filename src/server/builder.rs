//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use crate::config::ServerConfig;
use crate::core::module::Module;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_server_config(config.server.clone())
///     .register_module(GrubDashModule::from_seed(&config.seed))?
///     .serve(&config.server.bind_address())
///     .await?;
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    modules: Vec<Arc<dyn Module>>,
    custom_routes: Vec<Router>,
    server_config: ServerConfig,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            modules: Vec::new(),
            custom_routes: Vec::new(),
            server_config: ServerConfig::default(),
        }
    }

    /// Listener and middleware settings (CORS)
    pub fn with_server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = config;
        self
    }

    /// Add routes that are not backed by a resource
    ///
    /// They share the `404` fallback and middleware of the resource routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a module and all of its entities
    pub fn register_module(mut self, module: impl Module + 'static) -> Result<Self> {
        let module = Arc::new(module);

        module.register_entities(&mut self.entity_registry)?;
        tracing::debug!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "registered module"
        );

        self.modules.push(module);
        Ok(self)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        if self.modules.is_empty() {
            anyhow::bail!("no module registered. Call .register_module()");
        }

        for (method, path) in self.entity_registry.route_table() {
            tracing::debug!(%method, %path, "route");
        }

        Ok(RestExposure::build_router(
            &self.entity_registry,
            self.custom_routes,
            &self.server_config,
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, serves until SIGTERM or Ctrl+C, then drains
    /// in-flight requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGTERM or SIGINT (Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        },
    }
}
