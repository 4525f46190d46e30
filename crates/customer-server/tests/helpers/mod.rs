//! Test helpers for customer server integration tests
//!
//! Apps are built through the public router with an in-memory store, so
//! these tests need no database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use customer_server::{api, config::Config, store::InMemoryCustomerStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh, empty in-memory store
pub fn setup_test_app() -> Router {
    api::create_router(Arc::new(InMemoryCustomerStore::new()), &Config::default())
}

/// Send a request and decode the JSON body
///
/// An empty body (as for `204 No Content`) decodes to `Value::Null`.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if body.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&body).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    json_request("POST", uri, body)
}

pub fn put_json(uri: &str, body: &Value) -> Request<Body> {
    json_request("PUT", uri, body)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Create a customer through the API and return its id
pub async fn create_customer(app: &Router, first: &str, last: &str, email: &str) -> String {
    let body = serde_json::json!({ "firstName": first, "lastName": last, "email": email });
    let (status, json) = send(app, post_json("/api/v1/customers", &body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json["id"].as_str().unwrap().to_string()
}
