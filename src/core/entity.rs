//! Entity trait defining the core abstraction for stored resources

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for every resource kept in a collection.
///
/// Entities are plain serde records. The pipelines work on the JSON form of
/// a request and only shape it into `Self` once every stage has passed.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "dish")
    fn resource_name_singular() -> &'static str;

    /// Capitalized name used in client-facing messages (e.g., "Dish")
    fn label() -> &'static str;

    /// Fields an update is allowed to overwrite. Never contains `id`.
    fn mutable_fields() -> &'static [&'static str];

    /// Message returned when a route identifier resolves to nothing
    fn not_found_message(id: &str) -> String;

    /// Get the identifier assigned at creation
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Dish, Order};

    #[test]
    fn test_mutable_fields_never_include_id() {
        assert!(!Dish::mutable_fields().contains(&"id"));
        assert!(!Order::mutable_fields().contains(&"id"));
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(Dish::resource_name(), "dishes");
        assert_eq!(Dish::resource_name_singular(), "dish");
        assert_eq!(Order::resource_name(), "orders");
        assert_eq!(Order::resource_name_singular(), "order");
    }
}
