//! Typed error handling for the grubdash service
//!
//! Every failure a request can hit is one of the variants below. Each carries
//! its HTTP status code, and all of them render as `{ "error": message }`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: the route identifier does not resolve to a stored entity
//! - [`ValidationError`]: a validation stage rejected the request payload
//! - [`RequestError`]: the request itself is unroutable or unreadable
//! - [`ConfigError`]: configuration loading and seed validation
//! - [`StorageError`]: the backing collection refused a mutation
//!
//! # Example
//!
//! ```rust,ignore
//! match resource.read(&id).await {
//!     Ok(dish) => println!("Found: {:?}", dish),
//!     Err(GrubError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("Dish {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the service
#[derive(Debug)]
pub enum GrubError {
    /// Entity lookup errors
    Entity(EntityError),

    /// Validation stage failures
    Validation(ValidationError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for GrubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrubError::Entity(e) => write!(f, "{}", e),
            GrubError::Validation(e) => write!(f, "{}", e),
            GrubError::Request(e) => write!(f, "{}", e),
            GrubError::Config(e) => write!(f, "{}", e),
            GrubError::Storage(e) => write!(f, "{}", e),
            GrubError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GrubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrubError::Entity(e) => Some(e),
            GrubError::Validation(e) => Some(e),
            GrubError::Request(e) => Some(e),
            GrubError::Config(e) => Some(e),
            GrubError::Storage(e) => Some(e),
            GrubError::Internal(_) => None,
        }
    }
}

/// Error body emitted for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl GrubError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GrubError::Entity(e) => e.status_code(),
            GrubError::Validation(_) => StatusCode::BAD_REQUEST,
            GrubError::Request(e) => e.status_code(),
            GrubError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GrubError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GrubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error, used as a structured log field
    pub fn error_code(&self) -> &'static str {
        match self {
            GrubError::Entity(e) => e.error_code(),
            GrubError::Validation(e) => e.error_code(),
            GrubError::Request(e) => e.error_code(),
            GrubError::Config(_) => "CONFIG_ERROR",
            GrubError::Storage(_) => "STORAGE_ERROR",
            GrubError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for GrubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookup
#[derive(Debug)]
pub enum EntityError {
    /// No entity in the collection carries the route identifier
    NotFound {
        entity_type: String,
        id: String,
        message: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for GrubError {
    fn from(err: EntityError) -> Self {
        GrubError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by validation stages. All of them map to `400 Bad Request`.
#[derive(Debug)]
pub enum ValidationError {
    /// A required field is missing or malformed
    FieldError { field: String, message: String },

    /// The body `id` disagrees with the route identifier
    IdMismatch {
        entity_label: String,
        body_id: String,
        route_id: String,
    },

    /// One or more order lines carry a bad quantity (indices into `dishes`)
    InvalidQuantity { indices: Vec<usize> },

    /// The order status is absent or not one of the accepted values
    InvalidStatus,

    /// The order has reached (or is being moved to) its terminal state
    OrderFinalized,

    /// Only pending orders may be removed
    NotPending,

    /// The body could not be read as the expected JSON shape
    InvalidJson { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { message, .. } => write!(f, "{}", message),
            ValidationError::IdMismatch {
                entity_label,
                body_id,
                route_id,
            } => write!(
                f,
                "{} id does not match route id. {}: {}, Route: {}",
                entity_label, entity_label, body_id, route_id
            ),
            // One index reads "Dish i", several read "Dishes i, j".
            ValidationError::InvalidQuantity { indices } => match indices.as_slice() {
                [single] => write!(
                    f,
                    "Dish {} must have a quantity that is an integer greater than 0.",
                    single
                ),
                many => {
                    let joined: Vec<String> = many.iter().map(|i| i.to_string()).collect();
                    write!(
                        f,
                        "Dishes {} must have a quantity that is an integer greater than 0.",
                        joined.join(", ")
                    )
                }
            },
            ValidationError::InvalidStatus => write!(
                f,
                "Order must have a status of pending, preparing, out-for-delivery, or delivered."
            ),
            ValidationError::OrderFinalized => write!(f, "A delivered order cannot be changed."),
            ValidationError::NotPending => {
                write!(f, "An order cannot be deleted unless it is pending.")
            }
            ValidationError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } => "FIELD_INVALID",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
            ValidationError::InvalidQuantity { .. } => "QUANTITY_INVALID",
            ValidationError::InvalidStatus => "STATUS_INVALID",
            ValidationError::OrderFinalized => "ORDER_FINALIZED",
            ValidationError::NotPending => "ORDER_NOT_PENDING",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl From<ValidationError> for GrubError {
    fn from(err: ValidationError) -> Self {
        GrubError::Validation(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests that never reach a pipeline
#[derive(Debug)]
pub enum RequestError {
    /// No route matches the path
    PathNotFound { path: String },

    /// The path exists but does not accept the method
    MethodNotAllowed { method: String, path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::PathNotFound { path } => write!(f, "Path not found: {}", path),
            RequestError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::PathNotFound { .. } => "PATH_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

impl From<RequestError> for GrubError {
    fn from(err: RequestError) -> Self {
        GrubError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for GrubError {
    fn from(err: ConfigError) -> Self {
        GrubError::Config(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing collections
#[derive(Debug)]
pub enum StorageError {
    /// The position handed to a mutation no longer holds the expected entity
    StalePosition {
        index: usize,
        expected_id: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::StalePosition { index, expected_id } => write!(
                f,
                "Data integrity error: position {} no longer holds '{}'",
                index, expected_id
            ),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for GrubError {
    fn from(err: StorageError) -> Self {
        GrubError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for GrubError {
    fn from(err: serde_json::Error) -> Self {
        GrubError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for GrubError {
    fn from(err: std::io::Error) -> Self {
        GrubError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for GrubError {
    fn from(err: serde_yaml::Error) -> Self {
        GrubError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Store backends report failures through `anyhow`
impl From<anyhow::Error> for GrubError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => GrubError::Storage(storage),
            Err(other) => GrubError::Internal(other.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for grubdash operations
pub type GrubResult<T> = Result<T, GrubError>;

// =============================================================================
// Tests
// =============================================================================
