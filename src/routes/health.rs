// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root banner plus liveness and store-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` only says the process is serving. `/ready` also pings the
//! document store and answers 503 while it is unreachable.

use crate::constants::service_names;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<serde_json::Value> {
        Json(json!({ "message": service_names::ROOT_MESSAGE }))
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": resources.clock.now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        let timestamp = resources.clock.now().to_rfc3339();
        match resources.store.ping().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({ "status": "ready", "timestamp": timestamp })),
            )
                .into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "status": "unavailable", "timestamp": timestamp })),
                )
                    .into_response()
            }
        }
    }
}
