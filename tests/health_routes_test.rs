// ABOUTME: Integration tests for the root, health, and readiness endpoints
// ABOUTME: Also checks request ID propagation, CORS headers, and the not-found fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_app, resources_with_store, test_config, FlakyStore};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use workout_tracker::server::build_router;

#[tokio::test]
async fn test_root_message() {
    let (app, _clock) = create_test_app().await;

    let body: Value = AxumTestRequest::get("/")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body, json!({"message": "Workout Tracker Backend Running"}));
}

#[tokio::test]
async fn test_health_uses_injected_clock() {
    let (app, _clock) = create_test_app().await;

    let body: Value = AxumTestRequest::get("/health").send(app).await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["timestamp"], "2025-06-01T12:00:00+00:00");
}

#[tokio::test]
async fn test_ready_reflects_store_availability() {
    let store = Arc::new(FlakyStore::new().await);
    let (resources, _clock) = resources_with_store(store.clone(), test_config());
    let app = build_router(resources);

    let body: Value = AxumTestRequest::get("/ready")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "ready");

    store.fail_reads(true);
    let body: Value = AxumTestRequest::get("/ready")
        .send(app)
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_request_id_is_generated_or_propagated() {
    let (app, _clock) = create_test_app().await;

    let generated = AxumTestRequest::get("/health").send(app.clone()).await;
    assert!(!generated.header("x-request-id").unwrap().is_empty());

    let propagated = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-me-42")
        .send(app)
        .await;
    assert_eq!(propagated.header("x-request-id").unwrap(), "trace-me-42");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _clock) = create_test_app().await;

    let preflight = AxumTestRequest::options("/api/workouts")
        .header("origin", "https://example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app)
        .await;

    assert_eq!(
        preflight.header("access-control-allow-origin").unwrap(),
        "*"
    );
    assert!(preflight.header("access-control-allow-credentials").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _clock) = create_test_app().await;

    let body: Value = AxumTestRequest::get("/api/routines")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
