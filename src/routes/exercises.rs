// ABOUTME: Exercise catalog route handlers
// ABOUTME: Creates validated catalog entries and lists the whole catalog in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::documents::{create_document, get_documents};
use crate::resources::ServerResources;
use crate::routes::extract::json_body;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use workout_core::errors::AppError;
use workout_core::models::{Collection, Exercise, IdResponse};
use workout_core::validation::Schema;

/// Exercise catalog routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/exercises",
                get(Self::handle_list).post(Self::handle_create),
            )
            .with_state(resources)
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let payload = json_body(payload)?;
        let exercise = Exercise::from_payload(&payload, resources.clock.as_ref())?;

        let id = create_document(resources.store.as_ref(), &exercise, resources.clock.as_ref())
            .await?;

        Ok((StatusCode::OK, Json(IdResponse { id: id.to_string() })).into_response())
    }

    /// Handle GET /api/exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = get_documents(resources.store.as_ref(), Collection::Exercise, None).await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }
}
