//! Validation pipelines
//!
//! Every write (and every lookup by route identifier) runs through an ordered
//! chain of stages before the resource is touched. Stages inspect the request
//! payload or the entity resolved by an earlier stage and may halt the chain
//! with a client-facing error.

pub mod context;
pub mod extractor;
pub mod pipeline;
pub mod stages;
pub mod validators;

pub use context::RequestContext;
pub use extractor::JsonBody;
pub use pipeline::{Pipeline, Stage};
pub use stages::{FieldStage, IdMatchesRoute, ResolveById};
