//! Axum extractor for request bodies
//!
//! Wraps `Json<Value>` so that unreadable bodies are reported in the same
//! `{ "error": message }` shape as every other failure, instead of axum's
//! plain-text rejections.

use crate::core::error::{GrubError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Raw JSON body, handed unchanged to a validation pipeline
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create(JsonBody(body): JsonBody) -> GrubResult<Json<Value>> {
///     let ctx = RequestContext::from_body(body);
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = GrubError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(JsonBody(payload)),
            Err(rejection) => Err(ValidationError::InvalidJson {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}
