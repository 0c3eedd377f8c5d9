//! Shared helpers for HTTP tests.
//!
//! Every test builds its own router over a fresh in-memory database, so ids
//! start at 1 and tests never see each other's rows.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use dompet_api::{AppState, create_router};
use dompet_shared::config::DatabaseConfig;

/// Landing document shipped at the workspace root.
pub const INDEX_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../index.html");

/// Build the full application router over an isolated database.
pub async fn build_test_app() -> Router {
    let db = dompet_db::open(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    create_router(AppState::new(db), INDEX_FILE)
}

/// Send a request with an optional JSON body and parse the JSON response.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string());
    send_raw(app, method, uri, body.as_deref()).await
}

/// Send a request with a raw body, labelled as JSON.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Read a JSON number (amounts are emitted as floats) as a decimal.
pub fn decimal(value: &Value) -> Decimal {
    assert!(value.is_number(), "expected a number, got {value}");
    value.to_string().parse().unwrap()
}

/// Ids of a JSON array of entries, in response order.
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected an array")
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}
