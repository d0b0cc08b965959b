// ABOUTME: Validation error types enumerating every schema violation in a payload
// ABOUTME: Each violation carries the field path and a structured reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReason {
    /// A required field was absent
    Missing,
    /// The value had the wrong JSON type
    TypeMismatch {
        /// Expected type name
        expected: &'static str,
    },
    /// String shorter than the minimum length
    TooShort {
        /// Minimum length in characters
        min: usize,
    },
    /// String longer than the maximum length
    TooLong {
        /// Maximum length in characters
        max: usize,
    },
    /// Number outside the inclusive bounds
    OutOfRange {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// String could not be parsed as a timestamp
    InvalidTimestamp,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "field required"),
            Self::TypeMismatch { expected } => write!(f, "expected {expected}"),
            Self::TooShort { min } => write!(f, "must have at least {min} characters"),
            Self::TooLong { max } => write!(f, "must have at most {max} characters"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
            Self::InvalidTimestamp => write!(f, "invalid timestamp"),
        }
    }
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Path of the field, e.g. `exercises[0].sets[1].reps`
    pub field: String,
    /// Structured reason
    pub reason: ViolationReason,
    /// Human-readable message
    pub message: String,
}

impl FieldViolation {
    /// Create a violation for the given field path
    pub fn new(field: impl Into<String>, reason: ViolationReason) -> Self {
        let field = field.into();
        let message = format!("{field}: {reason}");
        Self {
            field,
            reason,
            message,
        }
    }
}

/// A payload failed validation; lists every violated field
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build from a list of violations
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Every violated field, in payload order
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether a violation was recorded for the given field path
    #[must_use]
    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => write!(f, "validation failed"),
            [single] => write!(f, "1 validation error: {}", single.message),
            many => write!(
                f,
                "{} validation errors: {}",
                many.len(),
                many.iter()
                    .map(|v| v.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        }
    }
}
