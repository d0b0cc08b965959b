// ABOUTME: Workout log route handlers
// ABOUTME: Creates validated workouts and lists the most recent ones newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::documents::{create_document, get_documents, sort_by_performed_at_desc};
use crate::resources::ServerResources;
use crate::routes::extract::json_body;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use workout_core::errors::{AppError, FieldViolation, ValidationError, ViolationReason};
use workout_core::models::{Collection, IdResponse, Workout};
use workout_core::validation::Schema;

/// Query parameters for listing workouts
#[derive(Debug, Deserialize)]
pub struct ListWorkoutsQuery {
    /// Maximum number of workouts, at least 1
    pub limit: Option<u32>,
}

/// Workout log routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .with_state(resources)
    }

    /// Resolve the listing limit, rejecting anything below 1
    fn resolve_limit(
        query: Result<Query<ListWorkoutsQuery>, QueryRejection>,
    ) -> Result<u32, ValidationError> {
        let reason = match query {
            Ok(Query(ListWorkoutsQuery { limit: None })) => {
                return Ok(limits::DEFAULT_WORKOUT_LIMIT)
            }
            Ok(Query(ListWorkoutsQuery { limit: Some(limit) })) if limit >= 1 => {
                return Ok(limit)
            }
            Ok(_) => ViolationReason::OutOfRange {
                min: 1.0,
                max: f64::from(u32::MAX),
            },
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "Unparseable workout limit");
                ViolationReason::TypeMismatch {
                    expected: "positive integer",
                }
            }
        };
        Err(ValidationError::from_violations(vec![FieldViolation::new(
            "limit", reason,
        )]))
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let payload = json_body(payload)?;
        let workout = Workout::from_payload(&payload, resources.clock.as_ref())?;

        let id = create_document(resources.store.as_ref(), &workout, resources.clock.as_ref())
            .await?;

        Ok((StatusCode::OK, Json(IdResponse { id: id.to_string() })).into_response())
    }

    /// Handle GET /api/workouts?limit=N
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ListWorkoutsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let limit = Self::resolve_limit(query)?;

        let mut workouts =
            get_documents(resources.store.as_ref(), Collection::Workout, Some(limit)).await?;
        sort_by_performed_at_desc(&mut workouts);

        Ok((StatusCode::OK, Json(workouts)).into_response())
    }
}
