//! Integration tests for customers API endpoints

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;

mod helpers;
use helpers::{create_customer, delete, get, post_json, put_json, send, setup_test_app};

const NOT_FOUND: &str = "Record could not be found with provided id";

#[tokio::test]
async fn test_list_customers_empty() {
    let app = setup_test_app();

    let (status, json) = send(&app, get("/api/v1/customers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_create_customer() {
    let app = setup_test_app();
    let body = json!({ "firstName": "A", "lastName": "B", "email": "a@b.com" });

    let (status, json) = send(&app, post_json("/api/v1/customers", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["firstName"], "A");
    assert_eq!(json["lastName"], "B");
    assert_eq!(json["email"], "a@b.com");
    assert!(json.get("phone").is_none());
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_customer_validation_errors() {
    let app = setup_test_app();
    let body = json!({ "firstName": "   ", "lastName": "B", "email": "a@b" });

    let (status, json) = send(&app, post_json("/api/v1/customers", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "errors": [
            { "field": "firstName", "message": "First name is required" },
            { "field": "email", "message": "Email must be proper format" },
        ]})
    );

    let (_, list) = send(&app, get("/api/v1/customers")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_customer_with_non_string_values() {
    let app = setup_test_app();
    let body = json!({ "firstName": 42, "lastName": "B", "email": 123 });

    let (status, json) = send(&app, post_json("/api/v1/customers", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "errors": [
            { "field": "firstName", "message": "firstName must be a string" },
            { "field": "email", "message": "Email must be proper format" },
        ]})
    );
}

#[tokio::test]
async fn test_create_customer_with_unicode_email() {
    let app = setup_test_app();
    let body = json!({ "firstName": "José", "lastName": "Ruiz", "email": "josé@example.com" });

    let (status, json) = send(&app, post_json("/api/v1/customers", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["email"], "josé@example.com");
}

#[tokio::test]
async fn test_create_customer_without_json_content_type() {
    let app = setup_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/customers")
        .body(Body::from(r#"{"firstName":"A","lastName":"B","email":"a@b.com"}"#))
        .unwrap();

    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_customer_round_trip() {
    let app = setup_test_app();
    let id = create_customer(&app, "Ada", "Lovelace", "ada@example.com").await;

    let (status, json) = send(&app, get(&format!("/api/v1/customers/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["firstName"], "Ada");
}

#[tokio::test]
async fn test_list_customers_with_filter() {
    let app = setup_test_app();
    create_customer(&app, "Ada", "Lovelace", "ada@example.com").await;
    create_customer(&app, "Grace", "Hopper", "grace@example.com").await;

    let (status, json) = send(&app, get("/api/v1/customers")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);

    let (status, json) = send(&app, get("/api/v1/customers?email=grace%40example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["lastName"], "Hopper");
}

#[tokio::test]
async fn test_update_customer_partial() {
    let app = setup_test_app();
    let id = create_customer(&app, "Ada", "Lovelace", "ada@example.com").await;
    let uri = format!("/api/v1/customers/{}", id);

    let body = json!({ "lastName": "Byron", "role": "admin" });
    let (status, json) = send(&app, put_json(&uri, &body)).await;

    assert_eq!(status, StatusCode::NON_AUTHORITATIVE_INFORMATION);
    assert_eq!(json["lastName"], "Byron");
    assert!(json.get("role").is_none());

    let (_, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched["firstName"], "Ada");
    assert_eq!(fetched["lastName"], "Byron");
    assert_eq!(fetched["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_customer_without_valid_parameters() {
    let app = setup_test_app();

    // Rejected before the id is looked at
    for uri in [
        "/api/v1/customers/not-an-id",
        "/api/v1/customers/00000000-0000-0000-0000-000000000000",
    ] {
        let (status, json) = send(&app, put_json(uri, &json!({ "foo": "bar" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({ "errors": "No valid parameters were provided to update. Valid parameters are: firstName, lastName, email, phone" })
        );
    }
}

#[tokio::test]
async fn test_update_customer_invalid_email() {
    let app = setup_test_app();
    let id = create_customer(&app, "Ada", "Lovelace", "ada@example.com").await;
    let uri = format!("/api/v1/customers/{}", id);

    let (status, json) = send(&app, put_json(&uri, &json!({ "email": "nope" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["message"], "Email must be proper format");

    let (_, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_unknown_customer() {
    let app = setup_test_app();
    let uri = format!("/api/v1/customers/{}", uuid_like());

    let (status, json) = send(&app, put_json(&uri, &json!({ "phone": "555-0100" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "errors": NOT_FOUND }));
}

#[tokio::test]
async fn test_delete_customer() {
    let app = setup_test_app();
    let id = create_customer(&app, "Ada", "Lovelace", "ada@example.com").await;
    let uri = format!("/api/v1/customers/{}", id);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "errors": NOT_FOUND }));
}

#[tokio::test]
async fn test_delete_unknown_customer() {
    let app = setup_test_app();
    let uri = format!("/api/v1/customers/{}", uuid_like());

    let (status, json) = send(&app, delete(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "errors": NOT_FOUND }));
}

#[tokio::test]
async fn test_health_and_root() {
    let app = setup_test_app();

    let (status, json) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Customer Server");
}

#[tokio::test]
async fn test_cors_preflight_for_configured_origin() {
    let app = setup_test_app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/customers")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

fn uuid_like() -> String {
    "6f1c2a9e-4b7d-4c1e-9a3f-2d8b5e7c0a11".to_string()
}
