// ABOUTME: Core types for the workout tracker backend
// ABOUTME: Foundation crate with record schemas, validation, errors, and the clock capability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate for the workout tracker. It holds everything that does
//! not depend on HTTP or the document store backend:
//!
//! - **models**: `Exercise`, `Workout`, `WorkoutExercise`, `WorkoutSet` and the
//!   `Collection` each record kind is stored in
//! - **validation**: turns untyped JSON payloads into validated records,
//!   reporting every violated field
//! - **errors**: `AppError`, `ErrorCode`, `ValidationError`, `StorageError`
//! - **clock**: the injected source of "now"

/// Injectable clock capability
pub mod clock;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Record models and their collections
pub mod models;

/// Payload validation into typed records
pub mod validation;
