// ABOUTME: Document store factory selecting a backend from the connection configuration
// ABOUTME: Hands the server a shared trait object so handlers never see the backend type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Document store factory
//!
//! This module turns a [`DatabaseConfig`] into a ready, migrated store.

use super::{DocumentStore, SqliteDocumentStore};
use crate::config::environment::{DatabaseConfig, DatabaseUrl};
use std::sync::Arc;
use tracing::{debug, info};
use workout_core::errors::StorageError;

/// Supported store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// `SQLite` file on disk
    SQLite,
    /// `SQLite` held in memory for the life of the process
    SQLiteMemory,
}

impl DatabaseType {
    /// Detect the backend a connection URL selects
    #[must_use]
    pub const fn detect(url: &DatabaseUrl) -> Self {
        match url {
            DatabaseUrl::SQLite { .. } => Self::SQLite,
            DatabaseUrl::Memory => Self::SQLiteMemory,
        }
    }

    /// Descriptive string for startup logs
    #[must_use]
    pub const fn backend_info(self) -> &'static str {
        match self {
            Self::SQLite => "SQLite (file)",
            Self::SQLiteMemory => "SQLite (in-memory, not persisted)",
        }
    }
}

/// Connect to the store described by `config` and run its migrations
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if the backend cannot be reached
pub async fn connect_store(config: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StorageError> {
    let database_type = DatabaseType::detect(&config.url);
    debug!(url = %config.url, "Detected {:?} document store", database_type);

    let store = match database_type {
        DatabaseType::SQLite | DatabaseType::SQLiteMemory => {
            SqliteDocumentStore::connect(&config.url, &config.name).await?
        }
    };

    info!(
        backend = database_type.backend_info(),
        database = %config.name,
        "Document store ready"
    );
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_backend() {
        assert_eq!(DatabaseType::detect(&DatabaseUrl::Memory), DatabaseType::SQLiteMemory);
        let file = DatabaseUrl::SQLite {
            path: PathBuf::from("./data/workouts.db"),
        };
        assert_eq!(DatabaseType::detect(&file), DatabaseType::SQLite);
    }

    #[tokio::test]
    async fn test_connect_memory_store() {
        let config = DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        };
        let store = connect_store(&config).await.unwrap();
        assert_eq!(store.database_name(), "workout_tracker");
        store.ping().await.unwrap();
    }
}
