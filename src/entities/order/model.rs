//! Order entity model

use crate::core::Entity;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle of an order. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Wire names of every accepted status
    pub const ALL: &'static [&'static str] =
        &["pending", "preparing", "out-for-delivery", "delivered"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order
///
/// Only the quantity is interpreted. Whatever else the client sent for the
/// line (dish id, name, price snapshot) is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishLine {
    #[serde(deserialize_with = "whole_quantity")]
    pub quantity: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Accepts `2` as well as `2.0`
fn whole_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
        Ok(raw as u32)
    } else {
        Err(serde::de::Error::custom(format!(
            "quantity must be a whole number, got {}",
            raw
        )))
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn label() -> &'static str {
        "Order"
    }

    fn mutable_fields() -> &'static [&'static str] {
        &["deliverTo", "mobileNumber", "status", "dishes"]
    }

    fn not_found_message(id: &str) -> String {
        format!("No matching order is found for orderId {}.", id)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
