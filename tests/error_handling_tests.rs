//! Routing, body parsing and error-shape tests

mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::*;
use grubdash::core::error::{EntityError, GrubError, RequestError, StorageError, ValidationError};
use serde_json::{Value, json};

mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path() {
        let server = server();

        let response = server.get("/menu").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Path not found: /menu"})
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_on_collection() {
        let server = server();

        let response = server.delete("/orders").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            error_message(&response.json()),
            "DELETE not allowed for /orders"
        );
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = server();

        let response = server
            .post("/dishes")
            .bytes(Bytes::from_static(b"{\"data\": {\"name\": "))
            .content_type("application/json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(error_message(&response.json()).starts_with("Invalid JSON"));

        let list: Value = server.get("/dishes").await.json();
        assert_eq!(list["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = server();

        let response = server.post("/orders").text("deliverTo=here").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>().get("error").is_some());
    }

    #[tokio::test]
    async fn test_non_object_data_reports_first_field() {
        let server = server();

        let response = server.post("/orders").json(&json!({"data": [1, 2]})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(&response.json()),
            "Order must include a deliverTo property."
        );
    }

    #[tokio::test]
    async fn test_health() {
        let server = server();

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(
                response.json::<Value>(),
                json!({"status": "ok", "service": "grubdash"})
            );
        }
    }
}

mod response_shape_tests {
    use super::*;

    async fn body_of(err: GrubError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_body_is_message_only() {
        let (status, body) = body_of(ValidationError::NotPending.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "An order cannot be deleted unless it is pending."})
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let err: GrubError = EntityError::NotFound {
            entity_type: "dish".to_string(),
            id: "x".to_string(),
            message: "Dish does not exist: x.".to_string(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Dish does not exist: x."}));
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let err: GrubError = RequestError::MethodNotAllowed {
            method: "PATCH".to_string(),
            path: "/dishes".to_string(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "PATCH not allowed for /dishes"}));
    }

    #[tokio::test]
    async fn test_storage_error_is_internal() {
        let err: GrubError = StorageError::StalePosition {
            index: 3,
            expected_id: "o1".to_string(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().is_some());
    }
}
