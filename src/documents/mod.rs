// ABOUTME: Generic create and list operations over the document store
// ABOUTME: Serializes validated records, stamps write timestamps, and projects identifiers on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Document Operations
//!
//! The two persistence operations every route goes through. Writes take a
//! validated [`Record`]; reads hand back caller-ready JSON with the native
//! identifier already projected to `id`.

/// Newest-first ordering of workout documents
pub mod ordering;
/// Native identifier to public `id` projection
pub mod projection;

pub use ordering::sort_by_performed_at_desc;
pub use projection::project_identifier;

use crate::constants::fields;
use crate::database_plugins::{DocumentId, DocumentStore, FindOptions, NewDocument};
use serde_json::Value;
use tracing::info;
use workout_core::clock::Clock;
use workout_core::errors::StorageError;
use workout_core::models::{Collection, Record};

/// Persist one validated record in its collection
///
/// The stored body is the record's fields plus `created_at` and
/// `updated_at`, both set to the clock's current instant.
///
/// # Errors
///
/// Returns [`StorageError`] if the record cannot be serialized into an object
/// or the store rejects the write
pub async fn create_document<R: Record>(
    store: &dyn DocumentStore,
    record: &R,
    clock: &dyn Clock,
) -> Result<DocumentId, StorageError> {
    let Value::Object(mut body) = serde_json::to_value(record)? else {
        return Err(StorageError::Corrupt(format!(
            "{} record did not serialize to an object",
            R::COLLECTION
        )));
    };

    // Same rendering as the serialized record timestamps
    let now = serde_json::to_value(clock.now())?;
    body.insert(fields::CREATED_AT.to_owned(), now.clone());
    body.insert(fields::UPDATED_AT.to_owned(), now);

    let id = store
        .insert(
            R::COLLECTION,
            NewDocument {
                fields: body,
                ordered_at: record.ordered_at(),
            },
        )
        .await?;

    info!(collection = %R::COLLECTION, id = %id, "Document created");
    Ok(id)
}

/// Fetch up to `limit` documents from a collection, identifiers projected
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be read
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: Collection,
    limit: Option<u32>,
) -> Result<Vec<Value>, StorageError> {
    let documents = store
        .find(collection, FindOptions::for_collection(collection, limit))
        .await?;
    Ok(documents.into_iter().map(project_identifier).collect())
}
