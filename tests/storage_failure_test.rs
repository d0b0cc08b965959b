// ABOUTME: Integration tests for store outages surfacing through the HTTP routes
// ABOUTME: Verifies the generic 500 response and that failed writes leave nothing behind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{resources_with_store, test_config, FlakyStore};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use workout_tracker::server::build_router;

async fn flaky_app() -> (axum::Router, Arc<FlakyStore>) {
    let store = Arc::new(FlakyStore::new().await);
    let (resources, _clock) = resources_with_store(store.clone(), test_config());
    (build_router(resources), store)
}

#[tokio::test]
async fn test_failed_create_is_generic_server_error() {
    let (app, store) = flaky_app().await;
    store.fail_writes(true);

    for (uri, payload) in [
        ("/api/exercises", json!({"name": "Plank"})),
        ("/api/workouts", json!({"title": "Core"})),
    ] {
        let body: Value = AxumTestRequest::post(uri)
            .json(&payload)
            .send(app.clone())
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
            .json();
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    store.fail_writes(false);
    for uri in ["/api/exercises", "/api/workouts"] {
        let listed: Vec<Value> = AxumTestRequest::get(uri)
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();
        assert!(listed.is_empty(), "{uri} kept a failed write");
    }
}

#[tokio::test]
async fn test_failed_list_is_generic_server_error() {
    let (app, store) = flaky_app().await;

    AxumTestRequest::post("/api/workouts")
        .json(&json!({}))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    store.fail_reads(true);
    for uri in ["/api/exercises", "/api/workouts?limit=5"] {
        let body: Value = AxumTestRequest::get(uri)
            .send(app.clone())
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
            .json();
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }
}

#[tokio::test]
async fn test_validation_runs_before_the_store() {
    let (app, store) = flaky_app().await;
    store.fail_writes(true);

    AxumTestRequest::post("/api/exercises")
        .json(&json!({"name": ""}))
        .send(app)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
