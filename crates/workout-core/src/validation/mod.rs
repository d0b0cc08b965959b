// ABOUTME: Field-level validation of untyped JSON payloads into typed records
// ABOUTME: Collects every violation with its path instead of stopping at the first one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Payload Validation
//!
//! [`Validator`] walks a `serde_json::Value` one field at a time. Each check
//! either returns the typed value or records a [`FieldViolation`] and returns
//! `None`, so a single pass reports every problem in the payload.
//!
//! Record types implement [`Schema`] on top of these checks.

use crate::clock::Clock;
use crate::errors::{FieldViolation, ValidationError, ViolationReason};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Number, Value};

/// Path label used when the payload root itself is rejected
const ROOT_LABEL: &str = "body";

/// Naive date-time layouts accepted for timestamps, interpreted as UTC
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Epoch values larger than this in magnitude are milliseconds, not seconds
const EPOCH_MILLIS_THRESHOLD: f64 = 2e10;

/// A record kind that can be validated from an untyped payload
pub trait Schema: Sized {
    /// Validate `value` located at `path`, recording violations in `validator`
    fn validate_at(
        validator: &mut Validator,
        path: &str,
        value: &Value,
        clock: &dyn Clock,
    ) -> Option<Self>;

    /// Validate a whole request payload
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated field
    fn from_payload(payload: &Value, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();
        let record = Self::validate_at(&mut validator, "", payload, clock);
        validator.finish(record)
    }
}

/// Join an object key onto a parent path
#[must_use]
pub fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Join an array index onto a parent path
#[must_use]
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Inclusive character-length bounds for a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Minimum number of characters
    pub min: usize,
    /// Maximum number of characters
    pub max: Option<usize>,
}

impl LengthBounds {
    /// No constraint at all
    pub const ANY: Self = Self { min: 0, max: None };

    /// Between `min` and `max` characters
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// At most `max` characters
    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self {
            min: 0,
            max: Some(max),
        }
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl Range {
    /// Create inclusive bounds
    #[must_use]
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    const fn violation(self) -> ViolationReason {
        ViolationReason::OutOfRange {
            min: self.min,
            max: self.max,
        }
    }
}

/// Accumulates violations while a payload is walked
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    /// Create an empty validator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation at `path`
    pub fn reject(&mut self, path: &str, reason: ViolationReason) {
        let label = if path.is_empty() { ROOT_LABEL } else { path };
        self.violations.push(FieldViolation::new(label, reason));
    }

    /// Whether any violation has been recorded so far
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Finish validation, returning the record only when nothing was rejected
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with every recorded violation
    pub fn finish<T>(self, record: Option<T>) -> Result<T, ValidationError> {
        match record {
            Some(record) if self.violations.is_empty() => Ok(record),
            _ => Err(ValidationError::from_violations(self.violations)),
        }
    }

    /// Require `value` to be a JSON object
    pub fn object<'v>(&mut self, path: &str, value: &'v Value) -> Option<&'v Map<String, Value>> {
        if let Value::Object(fields) = value {
            Some(fields)
        } else {
            self.reject(path, ViolationReason::TypeMismatch { expected: "object" });
            None
        }
    }

    /// Required string within `bounds`
    pub fn required_string(
        &mut self,
        path: &str,
        value: Option<&Value>,
        bounds: LengthBounds,
    ) -> Option<String> {
        let Some(value) = value else {
            self.reject(path, ViolationReason::Missing);
            return None;
        };
        self.bounded_string(path, value, bounds)
    }

    /// Optional string within `bounds`; absent and `null` both yield `Some(None)`
    pub fn optional_string(
        &mut self,
        path: &str,
        value: Option<&Value>,
        bounds: LengthBounds,
    ) -> Option<Option<String>> {
        match value {
            None | Some(Value::Null) => Some(None),
            Some(value) => self.bounded_string(path, value, bounds).map(Some),
        }
    }

    fn bounded_string(&mut self, path: &str, value: &Value, bounds: LengthBounds) -> Option<String> {
        let Value::String(text) = value else {
            self.reject(path, ViolationReason::TypeMismatch { expected: "string" });
            return None;
        };

        let length = text.chars().count();
        if length < bounds.min {
            self.reject(path, ViolationReason::TooShort { min: bounds.min });
            return None;
        }
        if let Some(max) = bounds.max {
            if length > max {
                self.reject(path, ViolationReason::TooLong { max });
                return None;
            }
        }
        Some(text.clone())
    }

    /// Required integer within `range`
    ///
    /// Integral floats such as `5.0` and numeric strings such as `"5"` are accepted.
    pub fn required_integer(&mut self, path: &str, value: Option<&Value>, range: Range) -> Option<i64> {
        let Some(value) = value else {
            self.reject(path, ViolationReason::Missing);
            return None;
        };

        let Some((lax, number)) = lax_number(value).and_then(|n| n.as_f64().map(|f| (n, f))) else {
            self.reject(path, ViolationReason::TypeMismatch { expected: "integer" });
            return None;
        };

        let integral = lax.as_i64().or_else(|| {
            (number.fract() == 0.0 && number.is_finite() && !lax.is_u64()).then_some(number as i64)
        });
        match integral {
            Some(int) if range.contains(int as f64) => Some(int),
            Some(_) => {
                self.reject(path, range.violation());
                None
            }
            // Only u64 values above i64::MAX reach this without a fraction
            None if number.fract() == 0.0 => {
                self.reject(path, range.violation());
                None
            }
            None => {
                self.reject(path, ViolationReason::TypeMismatch { expected: "integer" });
                None
            }
        }
    }

    /// Number within `range`, `default` when absent; numeric strings are accepted
    pub fn number_or(
        &mut self,
        path: &str,
        value: Option<&Value>,
        range: Range,
        default: f64,
    ) -> Option<f64> {
        let Some(value) = value else {
            return Some(default);
        };

        let Some(number) = lax_number(value).and_then(|n| n.as_f64()) else {
            self.reject(path, ViolationReason::TypeMismatch { expected: "number" });
            return None;
        };

        if range.contains(number) {
            Some(number)
        } else {
            self.reject(path, range.violation());
            None
        }
    }

    /// Timestamp normalized to UTC, `default` when absent
    ///
    /// Accepts RFC 3339 strings, naive ISO-8601 date-times and dates (taken as
    /// UTC), and Unix epoch numbers or numeric strings. Epoch values beyond
    /// `2e10` in magnitude are read as milliseconds.
    pub fn timestamp_or(
        &mut self,
        path: &str,
        value: Option<&Value>,
        default: impl FnOnce() -> DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let parsed = match value {
            None => return Some(default()),
            Some(Value::String(text)) => parse_timestamp(text).or_else(|| {
                text.trim().parse::<f64>().ok().and_then(timestamp_from_epoch)
            }),
            Some(Value::Number(number)) => number.as_f64().and_then(timestamp_from_epoch),
            Some(_) => {
                self.reject(path, ViolationReason::TypeMismatch { expected: "timestamp" });
                return None;
            }
        };

        if parsed.is_none() {
            self.reject(path, ViolationReason::InvalidTimestamp);
        }
        parsed
    }

    /// Array of values, empty when absent; `null` is rejected
    pub fn array_or_empty<'v>(&mut self, path: &str, value: Option<&'v Value>) -> Option<&'v [Value]> {
        match value {
            None => Some(&[][..]),
            Some(Value::Array(items)) => Some(items.as_slice()),
            Some(_) => {
                self.reject(path, ViolationReason::TypeMismatch { expected: "array" });
                None
            }
        }
    }

    /// Validate every element of an array as `T`, keeping order
    pub fn each<T: Schema>(
        &mut self,
        path: &str,
        items: &[Value],
        clock: &dyn Clock,
    ) -> Option<Vec<T>> {
        let mut records = Vec::with_capacity(items.len());
        let mut complete = true;
        for (index, item) in items.iter().enumerate() {
            match T::validate_at(self, &index_path(path, index), item, clock) {
                Some(record) => records.push(record),
                None => complete = false,
            }
        }
        complete.then_some(records)
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Numbers pass through; strings holding a JSON number are read as that number
fn lax_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => Some(number.clone()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn timestamp_from_epoch(epoch: f64) -> Option<DateTime<Utc>> {
    if !epoch.is_finite() {
        return None;
    }
    let seconds = if epoch.abs() > EPOCH_MILLIS_THRESHOLD {
        epoch / 1000.0
    } else {
        epoch
    };
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}
