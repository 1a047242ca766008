//! # GrubDash
//!
//! A dish catalog and order intake REST API.
//!
//! Every request that reads, writes or removes an entity first runs through
//! an ordered validation pipeline. The first stage to fail answers the
//! request with `{ "error": message }`; only a request that clears every
//! stage reaches the mutation.
//!
//! ## Resources
//!
//! | Route | Methods |
//! |---|---|
//! | `/dishes` | `GET`, `POST` |
//! | `/dishes/{dishId}` | `GET`, `PUT` |
//! | `/orders` | `GET`, `POST` |
//! | `/orders/{orderId}` | `GET`, `PUT`, `DELETE` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let config = AppConfig::load(DEFAULT_CONFIG_PATH)?;
//! ServerBuilder::new()
//!     .with_server_config(config.server.clone())
//!     .register_module(GrubDashModule::from_seed(&config.seed))?
//!     .serve(&config.server.bind_address())
//!     .await?;
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataService, Entity, IdGenerator, Module, Pipelines, Resolved, Resource,
        SequentialIdGenerator, UuidIdGenerator,
        error::{GrubError, GrubResult},
        validation::{FieldStage, IdMatchesRoute, JsonBody, Pipeline, RequestContext, ResolveById, Stage},
    };

    // === Entities ===
    pub use crate::entities::{Dish, DishLine, Order, OrderStatus};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{AppConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, SeedData, ServerConfig};

    // === Server ===
    pub use crate::app::{GrubDashModule, router};
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};
}
