//! Stages shared by every resource pipeline

use super::context::RequestContext;
use super::pipeline::Stage;
use super::validators;
use crate::core::error::{EntityError, GrubError, GrubResult, ValidationError};
use crate::core::{DataService, Entity};
use async_trait::async_trait;
use serde_json::Value;

type FieldCheck = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Checks one payload field with a validator and fails with `message`
pub struct FieldStage {
    field: &'static str,
    message: String,
    check: FieldCheck,
}

impl FieldStage {
    pub fn new(
        field: &'static str,
        message: impl Into<String>,
        check: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// Field must be present (truthy)
    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, message, validators::required())
    }

    /// Field must be a non-empty string
    pub fn required_text(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, message, validators::non_empty_string())
    }

    /// Field must be a number strictly greater than zero
    pub fn positive_number(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, message, validators::positive_number())
    }

    /// Field must be an array with at least one element
    pub fn non_empty_array(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, message, validators::non_empty_array())
    }
}

#[async_trait]
impl<T: Entity> Stage<T> for FieldStage {
    fn name(&self) -> &str {
        self.field
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<T>,
        _store: &dyn DataService<T>,
    ) -> GrubResult<()> {
        (self.check)(self.field, ctx.field(self.field)).map_err(|diagnostic| {
            tracing::debug!(field = self.field, %diagnostic, "field check failed");
            ValidationError::FieldError {
                field: self.field.to_string(),
                message: self.message.clone(),
            }
            .into()
        })
    }
}

/// Resolves the route identifier against the collection
///
/// On a hit the entity and its position are attached to the context; on a
/// miss the request fails with `404`.
pub struct ResolveById;

#[async_trait]
impl<T: Entity> Stage<T> for ResolveById {
    fn name(&self) -> &str {
        "resolve-by-id"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<T>,
        store: &dyn DataService<T>,
    ) -> GrubResult<()> {
        let id = ctx
            .route_id()
            .ok_or_else(|| GrubError::Internal("route carries no identifier".to_string()))?
            .to_string();

        match store.find(&id).await? {
            Some(resolved) => {
                ctx.resolve(resolved);
                Ok(())
            }
            None => Err(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                message: T::not_found_message(&id),
                id,
            }
            .into()),
        }
    }
}

/// A body `id`, when given, must equal the route identifier
///
/// Unlike the required-field stages, absence is fine here.
pub struct IdMatchesRoute;

#[async_trait]
impl<T: Entity> Stage<T> for IdMatchesRoute {
    fn name(&self) -> &str {
        "id-matches-route"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<T>,
        _store: &dyn DataService<T>,
    ) -> GrubResult<()> {
        let route_id = ctx
            .route_id()
            .ok_or_else(|| GrubError::Internal("route carries no identifier".to_string()))?;
        let body_id = ctx.field("id");

        if validators::required()("id", body_id).is_err() {
            return Ok(());
        }

        if body_id.as_str() == Some(route_id) {
            return Ok(());
        }

        let body_id = match body_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Err(ValidationError::IdMismatch {
            entity_label: T::label().to_string(),
            body_id,
            route_id: route_id.to_string(),
        }
        .into())
    }
}
