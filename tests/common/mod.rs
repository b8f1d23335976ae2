//! Common test utilities

use axum::body::Body;
use axum::Router;
use http::{HeaderMap, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use users_api::{build_app, AppState};

/// Build the full application over a fresh seeded store.
pub fn test_app() -> Router {
    build_app(AppState::seeded("1.0.0"), vec!["*".to_string()])
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    #[allow(dead_code)] // Not every test binary inspects headers
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send a request through the router and decode its JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body should be JSON")
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

/// Names of the users in a listing response, in order.
#[allow(dead_code)] // Test utility shared between integration tests
pub fn user_names(body: &Value) -> Vec<String> {
    body["users"]
        .as_array()
        .expect("users should be an array")
        .iter()
        .map(|u| u["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
