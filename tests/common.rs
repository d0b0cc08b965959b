// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds in-memory stores, frozen clocks, routers, and a store double with switchable failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_tracker`

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use workout_tracker::{
    clock::FixedClock,
    config::environment::{DatabaseConfig, DatabaseUrl, Environment, ServerConfig},
    database_plugins::{
        DocumentId, DocumentStore, FindOptions, NewDocument, SqliteDocumentStore, StoredDocument,
    },
    errors::StorageError,
    models::Collection,
    resources::ServerResources,
    server::build_router,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Instant the test clock starts at
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Configuration pointing at an in-memory store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Fresh in-memory store
pub async fn create_test_store() -> SqliteDocumentStore {
    init_test_logging();
    SqliteDocumentStore::connect(&DatabaseUrl::Memory, "workout_tracker_test")
        .await
        .unwrap()
}

/// Resources over `store` with a frozen clock the test can move
pub fn resources_with_store(
    store: Arc<dyn DocumentStore>,
    config: ServerConfig,
) -> (Arc<ServerResources>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(test_instant()));
    let resources = Arc::new(ServerResources::with_clock(
        store,
        clock.clone(),
        Arc::new(config),
    ));
    (resources, clock)
}

/// Resources over a fresh in-memory store
pub async fn create_test_resources() -> (Arc<ServerResources>, Arc<FixedClock>) {
    let store = create_test_store().await;
    resources_with_store(Arc::new(store), test_config())
}

/// Full application router over a fresh in-memory store
pub async fn create_test_app() -> (axum::Router, Arc<FixedClock>) {
    let (resources, clock) = create_test_resources().await;
    (build_router(resources), clock)
}

/// Store double delegating to `SQLite` until told to fail
pub struct FlakyStore {
    inner: SqliteDocumentStore,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    fail_listing: AtomicBool,
}

impl FlakyStore {
    pub async fn new() -> Self {
        Self {
            inner: create_test_store().await,
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            fail_listing: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Fail only collection listing, with an error longer than the diagnostic preview
    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    fn outage(flag: &AtomicBool) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            Err(StorageError::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    fn database_name(&self) -> &str {
        self.inner.database_name()
    }

    fn backend_info(&self) -> &'static str {
        "flaky test double"
    }

    async fn insert(
        &self,
        collection: Collection,
        document: NewDocument,
    ) -> Result<DocumentId, StorageError> {
        Self::outage(&self.fail_writes)?;
        self.inner.insert(collection, document).await
    }

    async fn find(
        &self,
        collection: Collection,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StorageError> {
        Self::outage(&self.fail_reads)?;
        self.inner.find(collection, options).await
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Self::outage(&self.fail_reads)?;
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("x".repeat(80)));
        }
        self.inner.list_collection_names().await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Self::outage(&self.fail_reads)?;
        self.inner.ping().await
    }
}
