// ABOUTME: SQLite document store implementation using sqlx
// ABOUTME: Stores JSON document bodies keyed by UUID, scoped by logical database and collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` document store
//!
//! All collections share one `documents` table. `seq` preserves insertion
//! order and `ordered_at` (microseconds since the epoch) backs the
//! newest-first listing so that limits apply after sorting.

use super::{DocumentId, DocumentStore, FindOptions, ListOrder, NewDocument, StoredDocument};
use crate::config::environment::DatabaseUrl;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use workout_core::errors::StorageError;
use workout_core::models::Collection;

/// Pooled connections for file-backed databases
const FILE_POOL_SIZE: u32 = 5;

/// `SQLite` document store
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    database_name: String,
}

impl SqliteDocumentStore {
    /// Open (creating if needed) the database at `url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the database cannot be opened
    pub async fn connect(url: &DatabaseUrl, database_name: &str) -> Result<Self, StorageError> {
        let pool = match url {
            DatabaseUrl::Memory => {
                // Every connection to :memory: is a separate database, so the
                // pool holds exactly one connection for its whole lifetime
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        StorageError::unavailable(format!(
                            "cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                SqlitePoolOptions::new()
                    .max_connections(FILE_POOL_SIZE)
                    .connect_with(options)
                    .await?
            }
        };

        let store = Self::from_pool(pool, database_name);
        store.migrate().await?;
        info!(url = %url, database = %database_name, "SQLite document store connected");
        Ok(store)
    }

    /// Wrap an existing pool without running migrations
    #[must_use]
    pub fn from_pool(pool: SqlitePool, database_name: &str) -> Self {
        Self {
            pool,
            database_name: database_name.to_owned(),
        }
    }

    /// Create the documents table and its indexes
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statements fail
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                database_name TEXT NOT NULL,
                collection TEXT NOT NULL,
                body TEXT NOT NULL,
                ordered_at INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_documents_ordered \
             ON documents(database_name, collection, ordered_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Close every pooled connection; later operations fail as unavailable
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_document(row: &SqliteRow) -> Result<StoredDocument, StorageError> {
        let id: String = row.try_get("id")?;
        let body: String = row.try_get("body")?;

        let native_id = DocumentId::from_str(&id)
            .map_err(|e| StorageError::Corrupt(format!("document id {id}: {e}")))?;
        let fields: Map<String, Value> = serde_json::from_str(&body)?;

        Ok(StoredDocument {
            native_id: Some(native_id),
            fields,
        })
    }
}

impl ListOrder {
    const fn order_by(self) -> &'static str {
        match self {
            Self::Insertion => "seq ASC",
            // SQLite sorts NULL below every value, so untimed rows come last
            Self::NewestFirst => "ordered_at DESC, seq ASC",
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    fn backend_info(&self) -> &'static str {
        "SQLite"
    }

    async fn insert(
        &self,
        collection: Collection,
        document: NewDocument,
    ) -> Result<DocumentId, StorageError> {
        let id = DocumentId::generate();
        let body = serde_json::to_string(&document.fields)?;

        sqlx::query(
            r"
            INSERT INTO documents (id, database_name, collection, body, ordered_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(id.to_string())
        .bind(&self.database_name)
        .bind(collection.name())
        .bind(body)
        .bind(document.ordered_at.map(|at| at.timestamp_micros()))
        .execute(&self.pool)
        .await
        .map_err(|e| match StorageError::from(e) {
            StorageError::Rejected { reason, .. } => StorageError::rejected("insert", reason),
            other => other,
        })?;

        debug!(collection = %collection, id = %id, "Document inserted");
        Ok(id)
    }

    async fn find(
        &self,
        collection: Collection,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StorageError> {
        // LIMIT -1 is unbounded in SQLite
        let limit = options.limit.map_or(-1, i64::from);
        let query = format!(
            "SELECT id, body FROM documents \
             WHERE database_name = ?1 AND collection = ?2 \
             ORDER BY {} LIMIT ?3",
            options.order.order_by()
        );

        let rows = sqlx::query(&query)
            .bind(&self.database_name)
            .bind(collection.name())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_document).collect()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        let rows = sqlx::query(
            "SELECT DISTINCT collection FROM documents WHERE database_name = ?1 ORDER BY collection",
        )
        .bind(&self.database_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("collection").map_err(StorageError::from))
            .collect()
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    async fn memory_store(name: &str) -> SqliteDocumentStore {
        SqliteDocumentStore::connect(&DatabaseUrl::Memory, name)
            .await
            .unwrap()
    }

    fn document(fields: Value, ordered_at: Option<i64>) -> NewDocument {
        NewDocument {
            fields: fields.as_object().cloned().unwrap(),
            ordered_at: ordered_at.map(|secs| Utc.timestamp_opt(secs, 0).single().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_round_trips_body() {
        let store = memory_store("unit").await;
        let id = store
            .insert(Collection::Exercise, document(json!({"name": "Dip"}), None))
            .await
            .unwrap();

        let found = store
            .find(Collection::Exercise, FindOptions::for_collection(Collection::Exercise, None))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].native_id, Some(id));
        assert_eq!(found[0].fields["name"], "Dip");
    }

    #[tokio::test]
    async fn test_newest_first_sorts_before_limit() {
        let store = memory_store("unit").await;
        for secs in [100, 500, 300, 200, 400] {
            store
                .insert(Collection::Workout, document(json!({"n": secs}), Some(secs)))
                .await
                .unwrap();
        }
        store
            .insert(Collection::Workout, document(json!({"n": 0}), None))
            .await
            .unwrap();

        let top = store
            .find(Collection::Workout, FindOptions::for_collection(Collection::Workout, Some(2)))
            .await
            .unwrap();
        let order: Vec<_> = top.iter().map(|d| d.fields["n"].clone()).collect();
        assert_eq!(order, vec![json!(500), json!(400)]);

        let all = store
            .find(Collection::Workout, FindOptions::for_collection(Collection::Workout, None))
            .await
            .unwrap();
        assert_eq!(all.last().unwrap().fields["n"], 0);
    }

    #[tokio::test]
    async fn test_collections_are_scoped_by_database_name() {
        let store = memory_store("first").await;
        store
            .insert(Collection::Exercise, document(json!({"name": "Pull-up"}), None))
            .await
            .unwrap();

        let other = SqliteDocumentStore::from_pool(store.pool.clone(), "second");
        assert!(other.list_collection_names().await.unwrap().is_empty());
        assert_eq!(store.list_collection_names().await.unwrap(), vec!["exercise"]);
    }

    #[tokio::test]
    async fn test_closed_pool_is_unavailable() {
        let store = memory_store("unit").await;
        store.close().await;

        let error = store.ping().await.unwrap_err();
        assert!(matches!(error, StorageError::Unavailable { .. }));
    }
}
