//! Mutators shared by all resources: shaping new entities and merge updates

use crate::core::Entity;
use crate::core::error::{GrubError, GrubResult};
use serde_json::{Map, Value};

/// Result of a merge update
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T> {
    pub entity: T,
    /// Allow-listed fields whose value actually changed
    pub changed: Vec<&'static str>,
}

/// Build a new entity from a validated payload and a freshly assigned id
///
/// Any `id` in the payload is replaced. Fields outside the entity's shape
/// are dropped by deserialization.
pub fn build_entity<T: Entity>(id: String, mut payload: Map<String, Value>) -> GrubResult<T> {
    payload.insert("id".to_string(), Value::String(id));
    Ok(serde_json::from_value(Value::Object(payload))?)
}

/// Merge a validated payload into `current`
///
/// Only fields named by [`Entity::mutable_fields`] are considered, `id` is
/// never overwritten, and a field is copied only when the payload carries it,
/// the current entity already has it, and the two values differ.
pub fn merge_update<T: Entity>(current: &T, payload: &Map<String, Value>) -> GrubResult<Merged<T>> {
    let mut fields = match serde_json::to_value(current) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            return Err(GrubError::Internal(format!(
                "{} does not serialize to an object",
                T::resource_name_singular()
            )));
        }
        Err(e) => return Err(GrubError::Internal(e.to_string())),
    };

    let mut changed = Vec::new();
    for &name in T::mutable_fields().iter().filter(|name| **name != "id") {
        let (Some(existing), Some(incoming)) = (fields.get_mut(name), payload.get(name)) else {
            continue;
        };
        if values_differ(existing, incoming) {
            *existing = incoming.clone();
            changed.push(name);
        }
    }

    let entity = serde_json::from_value(Value::Object(fields))?;
    Ok(Merged { entity, changed })
}

/// Numbers compare by value, so `5` and `5.0` are the same price
fn values_differ(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() != y.as_f64(),
        _ => a != b,
    }
}
