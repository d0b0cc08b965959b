// ABOUTME: Shared resource container injected into every HTTP handler
// ABOUTME: Holds the document store, the clock, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Created once at startup and shared through axum state. Every field is an
//! `Arc`, so cloning the container is cheap and never duplicates a pool.

use crate::config::environment::ServerConfig;
use crate::database_plugins::DocumentStore;
use std::sync::Arc;
use workout_core::clock::{Clock, SystemClock};

/// Dependencies shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Document store for both collections
    pub store: Arc<dyn DocumentStore>,
    /// Source of "now" for defaults and write timestamps
    pub clock: Arc<dyn Clock>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources around the wall clock
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: Arc<ServerConfig>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    /// Assemble resources with an injected clock
    #[must_use]
    pub fn with_clock(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }
}
