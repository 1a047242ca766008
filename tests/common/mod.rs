//! Shared fixtures for the HTTP-level tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TACO_ID: &str = "dish-taco";
pub const PENDING_ORDER_ID: &str = "order-pending";
pub const PREPARING_ORDER_ID: &str = "order-preparing";
pub const DELIVERED_ORDER_ID: &str = "order-delivered";

const SEED: &str = r#"
seed:
  dishes:
    - id: dish-taco
      name: Taco
      description: Crispy shell, spicy beef
      price: 5
      image_url: https://example.com/taco.png
  orders:
    - id: order-pending
      deliverTo: 1 Main St
      mobileNumber: "555-0100"
      status: pending
      dishes:
        - id: dish-taco
          quantity: 2
    - id: order-preparing
      deliverTo: 2 Oak Ave
      mobileNumber: "555-0101"
      status: preparing
      dishes:
        - id: dish-taco
          quantity: 1
    - id: order-delivered
      deliverTo: 3 Elm Rd
      mobileNumber: "555-0102"
      status: delivered
      dishes:
        - id: dish-taco
          quantity: 4
"#;

/// Seeded server with predictable ids (`test-1`, `test-2`, ...)
pub fn server() -> TestServer {
    let config = AppConfig::from_yaml_str(SEED).unwrap();
    config.validate().unwrap();

    let module = GrubDashModule::with_ids(
        &config.seed,
        Arc::new(SequentialIdGenerator::new("test-")),
    );
    let router = ServerBuilder::new()
        .with_server_config(config.server.clone())
        .register_module(module)
        .unwrap()
        .build()
        .unwrap();

    TestServer::new(router)
}

pub fn dish_body() -> Value {
    json!({
        "data": {
            "name": "Nacho",
            "description": "Cheesy chips",
            "price": 7,
            "image_url": "https://example.com/nacho.png"
        }
    })
}

pub fn order_body() -> Value {
    json!({
        "data": {
            "deliverTo": "10 Pine St",
            "mobileNumber": "555-0199",
            "dishes": [{"id": TACO_ID, "name": "Taco", "price": 5, "quantity": 3}]
        }
    })
}

/// `body` with `data.<field>` replaced (or removed when `value` is null)
pub fn with_field(mut body: Value, field: &str, value: Value) -> Value {
    let data = body["data"].as_object_mut().unwrap();
    if value.is_null() {
        data.remove(field);
    } else {
        data.insert(field.to_string(), value);
    }
    body
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap()
}
