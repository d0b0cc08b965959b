// ABOUTME: Storage error types raised by the document store adapters
// ABOUTME: Covers unreachable stores, rejected writes, and unreadable stored documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure raised by a document store.
///
/// Callers do not distinguish transient from permanent failures; every
/// variant surfaces as a generic server error carrying its text.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be reached or the connection pool is closed
    #[error("document store unavailable: {reason}")]
    Unavailable {
        /// Underlying failure text
        reason: String,
    },

    /// The store refused an operation
    #[error("document store rejected {operation}: {reason}")]
    Rejected {
        /// Operation that was refused (insert, find, ...)
        operation: &'static str,
        /// Underlying failure text
        reason: String,
    },

    /// A stored document could not be encoded or decoded
    #[error("stored document is unreadable: {0}")]
    Corrupt(String),
}

impl StorageError {
    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a rejected-operation error
    pub fn rejected(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        Self::Corrupt(error.to_string())
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::unavailable(error.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Corrupt(error.to_string())
            }
            other => Self::rejected("query", other.to_string()),
        }
    }
}
