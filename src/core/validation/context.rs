//! Request-scoped state threaded through a validation pipeline

use crate::core::error::{GrubError, GrubResult};
use crate::core::Resolved;
use serde_json::{Map, Value};

/// State accumulated while a request moves through its stages
///
/// Built once per request and owned by the pipeline run, so stages never
/// share state with other requests.
#[derive(Debug, Clone)]
pub struct RequestContext<T> {
    route_id: Option<String>,
    payload: Map<String, Value>,
    resolved: Option<Resolved<T>>,
}

impl<T> RequestContext<T> {
    /// Context for a request that carries a body
    ///
    /// The entity fields live under the top-level `data` key. A missing or
    /// non-object `data` yields an empty payload, so the first required-field
    /// stage reports the first missing field.
    pub fn from_body(body: Value) -> Self {
        let payload = match body {
            Value::Object(mut root) => match root.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };

        Self {
            route_id: None,
            payload,
            resolved: None,
        }
    }

    /// Context for a request without a body (read, delete)
    pub fn empty() -> Self {
        Self {
            route_id: None,
            payload: Map::new(),
            resolved: None,
        }
    }

    /// Attach the identifier taken from the route path
    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Value of a payload field, `Null` when absent
    pub fn field(&self, name: &str) -> &Value {
        self.payload.get(name).unwrap_or(&Value::Null)
    }

    pub fn resolve(&mut self, resolved: Resolved<T>) {
        self.resolved = Some(resolved);
    }

    /// The entity attached by the existence stage
    ///
    /// A stage that calls this without an existence stage ahead of it in the
    /// pipeline is a wiring bug, reported as an internal error.
    pub fn resolved(&self) -> GrubResult<&Resolved<T>> {
        self.resolved
            .as_ref()
            .ok_or_else(|| GrubError::Internal("no entity resolved for this request".to_string()))
    }

    pub fn into_parts(self) -> (Map<String, Value>, Option<Resolved<T>>) {
        (self.payload, self.resolved)
    }
}
