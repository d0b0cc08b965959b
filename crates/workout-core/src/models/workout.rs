// ABOUTME: Workout log record with embedded exercises and sets
// ABOUTME: Validates rep and weight bounds and defaults performed_at from the injected clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Collection, Record};
use crate::clock::Clock;
use crate::validation::{field_path, LengthBounds, Range, Schema, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive bounds for `WorkoutSet::reps`
pub const REPS_RANGE: Range = Range::inclusive(1.0, 1000.0);
/// Inclusive bounds for `WorkoutSet::weight`
pub const WEIGHT_RANGE: Range = Range::inclusive(0.0, 10_000.0);
/// Weight used when a set omits it
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// One set within an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Repetitions, 1-1000
    pub reps: u32,
    /// Load per repetition, 0-10000
    pub weight: f64,
}

/// One exercise performed within a workout
///
/// `exercise_id` is not checked against the catalog, so ad-hoc exercises can
/// be logged by name alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Catalog identifier, unverified
    pub exercise_id: Option<String>,
    /// Free-text name when no catalog entry applies
    pub exercise_name: Option<String>,
    /// Sets in the order they were performed
    pub sets: Vec<WorkoutSet>,
}

/// A logged session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// When the session happened (UTC)
    pub performed_at: DateTime<Utc>,
    /// Title or focus of the session
    pub title: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Exercises in session order
    pub exercises: Vec<WorkoutExercise>,
}

impl Record for Workout {
    const COLLECTION: Collection = Collection::Workout;

    fn ordered_at(&self) -> Option<DateTime<Utc>> {
        Some(self.performed_at)
    }
}

impl Schema for WorkoutSet {
    fn validate_at(
        validator: &mut Validator,
        path: &str,
        value: &Value,
        _clock: &dyn Clock,
    ) -> Option<Self> {
        let fields = validator.object(path, value)?;

        let reps = validator.required_integer(&field_path(path, "reps"), fields.get("reps"), REPS_RANGE);
        let weight = validator.number_or(
            &field_path(path, "weight"),
            fields.get("weight"),
            WEIGHT_RANGE,
            DEFAULT_WEIGHT,
        );

        Some(Self {
            reps: u32::try_from(reps?).ok()?,
            weight: weight?,
        })
    }
}

impl Schema for WorkoutExercise {
    fn validate_at(
        validator: &mut Validator,
        path: &str,
        value: &Value,
        clock: &dyn Clock,
    ) -> Option<Self> {
        let fields = validator.object(path, value)?;

        let exercise_id = validator.optional_string(
            &field_path(path, "exercise_id"),
            fields.get("exercise_id"),
            LengthBounds::ANY,
        );
        let exercise_name = validator.optional_string(
            &field_path(path, "exercise_name"),
            fields.get("exercise_name"),
            LengthBounds::ANY,
        );
        let sets_path = field_path(path, "sets");
        let sets = validator
            .array_or_empty(&sets_path, fields.get("sets"))
            .and_then(|items| validator.each::<WorkoutSet>(&sets_path, items, clock));

        Some(Self {
            exercise_id: exercise_id?,
            exercise_name: exercise_name?,
            sets: sets?,
        })
    }
}

impl Schema for Workout {
    fn validate_at(
        validator: &mut Validator,
        path: &str,
        value: &Value,
        clock: &dyn Clock,
    ) -> Option<Self> {
        let fields = validator.object(path, value)?;

        let performed_at = validator.timestamp_or(
            &field_path(path, "performed_at"),
            fields.get("performed_at"),
            || clock.now(),
        );
        let title =
            validator.optional_string(&field_path(path, "title"), fields.get("title"), LengthBounds::ANY);
        let notes =
            validator.optional_string(&field_path(path, "notes"), fields.get("notes"), LengthBounds::ANY);
        let exercises_path = field_path(path, "exercises");
        let exercises = validator
            .array_or_empty(&exercises_path, fields.get("exercises"))
            .and_then(|items| validator.each::<WorkoutExercise>(&exercises_path, items, clock));

        Some(Self {
            performed_at: performed_at?,
            title: title?,
            notes: notes?,
            exercises: exercises?,
        })
    }
}
