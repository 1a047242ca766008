//! Configuration loading from disk

use grubdash::core::error::{ConfigError, GrubError};
use grubdash::prelude::*;
use std::io::Write;

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/grubdash.yaml");
    let config = AppConfig::from_yaml_file(path).unwrap();

    config.validate().unwrap();
    assert!(!config.seed.dishes.is_empty());
    assert!(
        config
            .seed
            .orders
            .iter()
            .any(|o| o.status == OrderStatus::Pending)
    );
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.yaml")).unwrap();

    assert!(config.seed.dishes.is_empty());
    assert!(config.seed.orders.is_empty());
    assert!(config.server.cors);
}

#[test]
fn test_load_rejects_invalid_seed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
seed:
  orders:
    - id: o1
      deliverTo: somewhere
      mobileNumber: "1"
      dishes: []
"#,
    )
    .unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        GrubError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_load_rejects_unknown_status() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
seed:
  orders:
    - id: o1
      deliverTo: somewhere
      mobileNumber: "1"
      status: cancelled
      dishes:
        - quantity: 1
"#,
    )
    .unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        GrubError::Config(ConfigError::ParseError { .. })
    ));
}

#[tokio::test]
async fn test_seeded_router_serves_config_data() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/grubdash.yaml");
    let config = AppConfig::from_yaml_file(path).unwrap();
    let server = axum_test::TestServer::new(router(&config).unwrap());

    let body: serde_json::Value = server.get("/dishes").await.json();
    assert_eq!(
        body["data"].as_array().unwrap().len(),
        config.seed.dishes.len()
    );
}
