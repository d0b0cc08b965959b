// ABOUTME: Stable newest-first ordering of workout documents by performed_at
// ABOUTME: Missing or unparseable timestamps sort last as the minimum instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Reverse;

fn performed_at(document: &Value) -> DateTime<Utc> {
    document
        .get(fields::PERFORMED_AT)
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map_or(DateTime::<Utc>::MIN_UTC, |at| at.with_timezone(&Utc))
}

/// Sort documents by `performed_at`, most recent first
///
/// The sort is stable, so documents with equal timestamps keep their
/// relative order.
pub fn sort_by_performed_at_desc(documents: &mut [Value]) {
    documents.sort_by_key(|document| Reverse(performed_at(document)));
}
