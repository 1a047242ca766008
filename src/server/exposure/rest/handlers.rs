//! Generic HTTP handlers shared by every resource
//!
//! Each handler is a thin adapter: it extracts the route id and body, calls
//! the matching [`Resource`] operation and wraps the result in `{ data }`.

use crate::core::error::{GrubError, GrubResult, RequestError};
use crate::core::resource::Resource;
use crate::core::validation::JsonBody;
use crate::core::Entity;
use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
};
use serde::Serialize;
use std::sync::Arc;

/// Success envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

type ResourceState<T> = State<Arc<Resource<T>>>;

pub async fn list<T: Entity>(
    State(resource): ResourceState<T>,
) -> GrubResult<Json<DataResponse<Vec<T>>>> {
    Ok(DataResponse::new(resource.list().await?))
}

pub async fn create<T: Entity>(
    State(resource): ResourceState<T>,
    JsonBody(body): JsonBody,
) -> GrubResult<(StatusCode, Json<DataResponse<T>>)> {
    let entity = resource.create(body).await?;
    Ok((StatusCode::CREATED, DataResponse::new(entity)))
}

pub async fn read<T: Entity>(
    State(resource): ResourceState<T>,
    Path(id): Path<String>,
) -> GrubResult<Json<DataResponse<T>>> {
    Ok(DataResponse::new(resource.read(&id).await?))
}

pub async fn update<T: Entity>(
    State(resource): ResourceState<T>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> GrubResult<Json<DataResponse<T>>> {
    Ok(DataResponse::new(resource.update(&id, body).await?))
}

pub async fn delete<T: Entity>(
    State(resource): ResourceState<T>,
    Path(id): Path<String>,
) -> GrubResult<StatusCode> {
    resource.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> GrubError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// Unknown path
pub async fn path_not_found(uri: Uri) -> GrubError {
    RequestError::PathNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
