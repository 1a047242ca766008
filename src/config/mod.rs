//! Configuration loading and management
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 5000
//!   cors: true
//! seed:
//!   dishes:
//!     - id: 3c637d011d844ebab1205fef8a7e36ea
//!       name: Broccoli and beetroot stir fry
//!       description: Crunchy stir fry featuring fresh broccoli and beetroot
//!       price: 15
//!       image_url: https://images.example.com/stir-fry.jpg
//!   orders: []
//! ```

use crate::core::Entity;
use crate::core::error::{ConfigError, GrubResult};
use crate::entities::{Dish, Order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "GRUBDASH_CONFIG";

/// Used when [`CONFIG_PATH_ENV`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/grubdash.yaml";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Collections loaded into the stores at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> GrubResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> GrubResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load the file at `path`, falling back to defaults when it is absent
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn load(path: impl AsRef<Path>) -> GrubResult<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            tracing::info!(path = %path.display(), "loading configuration");
            Self::from_yaml_file(path)?
        } else {
            tracing::warn!(
                path = %path.display(),
                "configuration file not found, using defaults"
            );
            Self::default()
        };

        let config = config.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST` and `PORT` from the process environment
    pub fn with_env_overrides(self) -> GrubResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `HOST` and `PORT` as reported by `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> GrubResult<Self> {
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                value: port.clone(),
                message: "must be a port number".to_string(),
            })?;
        }

        Ok(self)
    }

    /// Reject seed data that the running service could never have produced
    pub fn validate(&self) -> GrubResult<()> {
        check_unique_ids(&self.seed.dishes)?;
        check_unique_ids(&self.seed.orders)?;

        for dish in &self.seed.dishes {
            if !(dish.price.is_finite() && dish.price > 0.0) {
                return Err(invalid(
                    "seed.dishes.price",
                    &dish.price.to_string(),
                    format!("dish {} must have a price greater than 0", dish.id),
                ));
            }
        }

        for order in &self.seed.orders {
            if order.dishes.is_empty() {
                return Err(invalid(
                    "seed.orders.dishes",
                    "[]",
                    format!("order {} must include at least one dish", order.id),
                ));
            }
            if let Some(index) = order.dishes.iter().position(|line| line.quantity == 0) {
                return Err(invalid(
                    "seed.orders.dishes.quantity",
                    "0",
                    format!("order {} line {} must have a quantity greater than 0", order.id, index),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, value: &str, message: String) -> crate::core::error::GrubError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message,
    }
    .into()
}

fn check_unique_ids<T: Entity>(items: &[T]) -> GrubResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id().is_empty() {
            return Err(invalid(
                &format!("seed.{}.id", T::resource_name()),
                "",
                "id must not be empty".to_string(),
            ));
        }
        if !seen.insert(item.id()) {
            return Err(invalid(
                &format!("seed.{}.id", T::resource_name()),
                item.id(),
                "duplicate id".to_string(),
            ));
        }
    }
    Ok(())
}
