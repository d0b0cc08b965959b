// ABOUTME: Document store abstraction for the exercise catalog and workout log
// ABOUTME: Backend-neutral trait plus the document, identifier, and query types it exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Document Store Abstraction
//!
//! The application talks to its store only through [`DocumentStore`]. A
//! document is a JSON object living in one of the fixed [`Collection`]s and
//! keyed by a store-generated [`DocumentId`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use workout_core::errors::StorageError;
use workout_core::models::Collection;

/// Database type detection and store construction
pub mod factory;
/// `SQLite` document store backed by `sqlx`
pub mod sqlite;

pub use factory::connect_store;
pub use sqlite::SqliteDocumentStore;

/// Store-native document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a new globally unique identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A document about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    /// Document body
    pub fields: Map<String, Value>,
    /// Listing timestamp, if the record kind has one
    pub ordered_at: Option<DateTime<Utc>>,
}

/// A document read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Native identifier; `None` only for records the store could not key
    pub native_id: Option<DocumentId>,
    /// Document body
    pub fields: Map<String, Value>,
}

/// Order documents are returned in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest insert first
    Insertion,
    /// Most recent listing timestamp first, untimed documents last
    NewestFirst,
}

/// Options for [`DocumentStore::find`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Maximum number of documents; `None` is unbounded
    pub limit: Option<u32>,
    /// Result order
    pub order: ListOrder,
}

impl FindOptions {
    /// Default options for a collection: workouts newest first, everything
    /// else in insertion order
    #[must_use]
    pub const fn for_collection(collection: Collection, limit: Option<u32>) -> Self {
        let order = match collection {
            Collection::Workout => ListOrder::NewestFirst,
            Collection::Exercise => ListOrder::Insertion,
        };
        Self { limit, order }
    }
}

/// Core document store trait
///
/// Implementations are shared across requests behind an `Arc` and must not
/// hold per-request state.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Logical database name documents are scoped to
    fn database_name(&self) -> &str;

    /// Human-readable backend description
    fn backend_info(&self) -> &'static str;

    /// Persist one document and return its generated identifier
    async fn insert(
        &self,
        collection: Collection,
        document: NewDocument,
    ) -> Result<DocumentId, StorageError>;

    /// Retrieve documents from a collection
    async fn find(
        &self,
        collection: Collection,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StorageError>;

    /// Names of collections currently holding documents
    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;

    /// Check that the store answers
    async fn ping(&self) -> Result<(), StorageError>;
}
