// ABOUTME: Route module organization for the workout tracker HTTP endpoints
// ABOUTME: One module per domain, each exposing a routes() constructor over shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the workout tracker
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate validation to `workout_core` and persistence to
//! [`crate::documents`].

/// Store diagnostic route
pub mod diagnostics;
/// Exercise catalog routes
pub mod exercises;
/// Request body extraction helpers
pub mod extract;
/// Root, health, and readiness routes
pub mod health;
/// Workout log routes
pub mod workouts;

/// Store diagnostic route handlers
pub use diagnostics::DiagnosticRoutes;
/// Exercise catalog route handlers
pub use exercises::ExerciseRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Workout log route handlers
pub use workouts::WorkoutRoutes;
