//! Ordered validator chains
//!
//! A [`Pipeline`] runs its stages in the order they were added. The first
//! stage to fail ends the run: its error is returned through `?` and no later
//! stage (and no mutation) executes.

use super::context::RequestContext;
use crate::core::error::GrubResult;
use crate::core::{DataService, Entity};
use async_trait::async_trait;

/// One check in a validator chain
#[async_trait]
pub trait Stage<T: Entity>: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Pass silently or fail with the error to surface to the client
    async fn run(&self, ctx: &mut RequestContext<T>, store: &dyn DataService<T>)
    -> GrubResult<()>;
}

/// Ordered sequence of stages guarding one route
pub struct Pipeline<T> {
    stages: Vec<Box<dyn Stage<T>>>,
}

impl<T: Entity> Pipeline<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain
    pub fn stage(mut self, stage: impl Stage<T> + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order, stopping at the first failure
    pub async fn run(
        &self,
        mut ctx: RequestContext<T>,
        store: &dyn DataService<T>,
    ) -> GrubResult<RequestContext<T>> {
        for stage in &self.stages {
            if let Err(err) = stage.run(&mut ctx, store).await {
                tracing::debug!(
                    entity_type = T::resource_name_singular(),
                    stage = stage.name(),
                    code = err.error_code(),
                    "stage rejected request"
                );
                return Err(err);
            }
        }

        Ok(ctx)
    }
}

impl<T: Entity> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
