#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, HOST};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use prozu_api::app::build_router;
use prozu_api::config::{ServerConfig, StoreBackend};
use prozu_api::state::AppState;
use prozu_db::{EmployeeStore, MemoryEmployeeStore};

/// Host header sent with every test request.
pub const TEST_HOST: &str = "prozu.test";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        public_base_url: None,
        seed_on_startup: false,
    }
}

/// Build the full application router over the given store and config.
pub fn build_app_with(store: Arc<dyn EmployeeStore>, config: ServerConfig) -> Router {
    build_router(AppState {
        store,
        config: Arc::new(config),
    })
}

/// Build the full application router over a fresh, empty in-memory store.
///
/// The store is returned as well so tests can inspect it directly.
pub fn build_test_app() -> (Router, Arc<MemoryEmployeeStore>) {
    let store = Arc::new(MemoryEmployeeStore::new());
    let app = build_app_with(store.clone(), test_config());
    (app, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(HOST, TEST_HOST);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

/// Send a request with a raw, possibly malformed, JSON body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(HOST, TEST_HOST)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
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

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Strip the test base address from an absolute URL so it can be requested.
pub fn path_of(url: &str) -> &str {
    url.strip_prefix(&format!("http://{TEST_HOST}"))
        .unwrap_or(url)
}
