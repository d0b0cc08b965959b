// ABOUTME: Converts store-native document identifiers into the public string id
// ABOUTME: Applied at the output boundary of every read path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use crate::database_plugins::StoredDocument;
use serde_json::Value;

/// Turn a stored document into its caller-facing JSON form
///
/// Any `_id` field in the body is dropped and the native identifier is
/// exposed as `id`. A document without a native identifier is returned as
/// stored.
#[must_use]
pub fn project_identifier(document: StoredDocument) -> Value {
    let StoredDocument { native_id, mut fields } = document;
    if let Some(native_id) = native_id {
        fields.remove(fields::NATIVE_ID);
        fields.insert(fields::PUBLIC_ID.to_owned(), Value::String(native_id.to_string()));
    }
    Value::Object(fields)
}
