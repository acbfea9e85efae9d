//! Integration tests for the ambient HTTP surface: health, docs, headers.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, get};
use uuid::Uuid;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = build_test_app().await;
    let response = get(&app, "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app().await;
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app().await;
    let response = get(&app, "/books").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header")
        .to_str()
        .unwrap();
    assert!(Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn openapi_document_lists_book_routes() {
    let app = build_test_app().await;
    let response = get(&app, "/docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["paths"]["/books"]["get"].is_object());
    assert!(json["paths"]["/create-book"]["post"].is_object());
    assert!(json["paths"]["/books/{book_id}"]["delete"].is_object());
    assert!(json["components"]["schemas"]["BookRequest"].is_object());
}
