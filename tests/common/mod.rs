#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use bookshelf_app::books::BooksModule;
use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::{InitCtx, Module, ModuleRegistry};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Full application router over a freshly seeded catalog.
pub async fn build_test_app() -> Router {
    build_app_with(Settings::default()).await
}

/// Full application router, with the books module initialized from `settings`.
///
/// Mirrors the production bootstrap so tests exercise the same middleware
/// stack (tracing, CORS, request id, timeout).
pub async fn build_app_with(settings: Settings) -> Router {
    let mut registry = ModuleRegistry::new();
    registry
        .register(Arc::new(BooksModule::new()) as Arc<dyn Module>)
        .unwrap();
    registry
        .init_all(&InitCtx {
            settings: &settings,
        })
        .await
        .unwrap();

    bookshelf_http::build_router(&registry, &settings.server)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// GET a JSON array and return the `id` of every element.
pub async fn ids(app: &Router, uri: &str) -> Vec<i64> {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .expect("array body")
        .iter()
        .map(|book| book["id"].as_i64().unwrap())
        .collect()
}
