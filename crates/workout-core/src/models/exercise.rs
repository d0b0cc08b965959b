// ABOUTME: Exercise catalog record and its validation schema
// ABOUTME: Enforces name length 1-100 and optional notes up to 300 characters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Collection, Record};
use crate::clock::Clock;
use crate::validation::{field_path, LengthBounds, Schema, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive length bounds for `Exercise::name`
pub const NAME_LENGTH: LengthBounds = LengthBounds::between(1, 100);
/// Inclusive length bounds for `Exercise::notes`
pub const NOTES_LENGTH: LengthBounds = LengthBounds::at_most(300);

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name
    pub name: String,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Record for Exercise {
    const COLLECTION: Collection = Collection::Exercise;
}

impl Schema for Exercise {
    fn validate_at(
        validator: &mut Validator,
        path: &str,
        value: &Value,
        _clock: &dyn Clock,
    ) -> Option<Self> {
        let fields = validator.object(path, value)?;

        let name = validator.required_string(&field_path(path, "name"), fields.get("name"), NAME_LENGTH);
        let notes =
            validator.optional_string(&field_path(path, "notes"), fields.get("notes"), NOTES_LENGTH);

        Some(Self {
            name: name?,
            notes: notes?,
        })
    }
}
