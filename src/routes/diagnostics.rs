// ABOUTME: Store diagnostic route reporting connectivity and configuration presence
// ABOUTME: Always answers 200, degrading store failures into status strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `/test` diagnostic endpoint
//!
//! Reports whether the store answers and which collections hold documents.
//! Configuration values are never echoed, only whether they came from the
//! environment.

use crate::constants::limits;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Body returned by `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    /// Process status
    pub backend: String,
    /// Store status
    pub database: String,
    /// Whether `DATABASE_URL` was set
    pub database_url: String,
    /// Whether `DATABASE_NAME` was set
    pub database_name: String,
    /// Whether the store answered a ping
    pub connection_status: String,
    /// Names of non-empty collections
    pub collections: Vec<String>,
}

/// Diagnostic routes handler
pub struct DiagnosticRoutes;

impl DiagnosticRoutes {
    /// Create the diagnostic route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/test", get(Self::handle_test))
            .with_state(resources)
    }

    fn presence(set: bool) -> String {
        let status = if set { "✅ Set" } else { "❌ Not Set" };
        status.to_owned()
    }

    fn truncate(error: &impl ToString) -> String {
        error
            .to_string()
            .chars()
            .take(limits::DIAGNOSTIC_ERROR_CHARS)
            .collect()
    }

    /// Build the report, never failing
    pub async fn report(resources: &ServerResources) -> DiagnosticReport {
        let mut report = DiagnosticReport {
            backend: "✅ Running".to_owned(),
            database: "❌ Not Available".to_owned(),
            database_url: Self::presence(resources.config.database.url_from_env),
            database_name: Self::presence(resources.config.database.name_from_env),
            connection_status: "Not Connected".to_owned(),
            collections: Vec::new(),
        };

        if let Err(e) = resources.store.ping().await {
            warn!(error = %e, "Diagnostic ping failed");
            report.database = format!("❌ Error: {}", Self::truncate(&e));
            return report;
        }

        report.connection_status = "Connected".to_owned();
        match resources.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(limits::DIAGNOSTIC_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_owned();
            }
            Err(e) => {
                warn!(error = %e, "Diagnostic collection listing failed");
                report.database = format!("⚠️  Connected but Error: {}", Self::truncate(&e));
            }
        }
        report
    }

    async fn handle_test(State(resources): State<Arc<ServerResources>>) -> Json<DiagnosticReport> {
        Json(Self::report(&resources).await)
    }
}
