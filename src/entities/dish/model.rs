//! Dish entity model

use crate::core::Entity;
use serde::{Deserialize, Serialize, Serializer};

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "price_as_written")]
    pub price: f64,
    pub image_url: String,
}

/// Largest magnitude an `f64` holds with every integer below it exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole prices go out as integers, so `5` is echoed as `5` and not `5.0`
fn price_as_written<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.is_finite() && price.fract() == 0.0 && price.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "dish"
    }

    fn label() -> &'static str {
        "Dish"
    }

    fn mutable_fields() -> &'static [&'static str] {
        &["name", "description", "price", "image_url"]
    }

    fn not_found_message(id: &str) -> String {
        format!("Dish does not exist: {}.", id)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
