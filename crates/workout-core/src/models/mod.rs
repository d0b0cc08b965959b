// ABOUTME: Record models for the exercise catalog and workout log
// ABOUTME: Maps each record kind to its fixed document collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Models
//!
//! Validated records stored as documents. `WorkoutExercise` and `WorkoutSet`
//! are embedded by value inside a `Workout` and have no identity of their own.

/// Exercise catalog entries
pub mod exercise;
/// Logged workouts with embedded exercises and sets
pub mod workout;

pub use exercise::Exercise;
pub use workout::{Workout, WorkoutExercise, WorkoutSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Exercise catalog
    Exercise,
    /// Workout log
    Workout,
}

impl Collection {
    /// Storage name of the collection
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Workout => "workout",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated record that is persisted as a document
pub trait Record: Serialize + Send + Sync {
    /// Collection the record is stored in
    const COLLECTION: Collection;

    /// Timestamp the collection is listed by, most recent first
    ///
    /// Records without one are listed in insertion order.
    fn ordered_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Response body for a created record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    /// Public identifier of the new document
    pub id: String,
}
