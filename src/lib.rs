// ABOUTME: Main library entry point for the workout tracker backend
// ABOUTME: Exposes the HTTP routes, document store, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! A small HTTP backend for an exercise catalog and a workout log. Payloads
//! are validated into typed records, stored as JSON documents, and listed
//! back with string identifiers.
//!
//! ## Architecture
//!
//! - **Core** (`workout_core`): record schemas, validation, errors, clock
//! - **Document store**: async `DocumentStore` trait with an `SQLite` backend
//! - **Documents**: create and list operations plus identifier projection
//! - **Routes**: thin axum handlers over shared `ServerResources`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workout_tracker::config::environment::ServerConfig;
//! use workout_tracker::database_plugins::connect_store;
//! use workout_tracker::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = connect_store(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(store, Arc::new(config)));
//!     workout_tracker::server::serve(resources).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Document store abstraction and backends
pub mod database_plugins;

/// Record persistence and read-path projection
pub mod documents;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared handler dependencies
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

pub use workout_core::{clock, errors, models, validation};
