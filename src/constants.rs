// ABOUTME: Application constants for configuration defaults, limits, and service names
// ABOUTME: Central place for environment variable names and HTTP-facing strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Environment variable names
pub mod env_keys {
    /// Document store connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Logical database name inside the store
    pub const DATABASE_NAME: &str = "DATABASE_NAME";
    /// HTTP port
    pub const PORT: &str = "PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter level
    pub const LOG_LEVEL: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source locations in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Log span open and close events when set
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default document store location
    pub const DATABASE_URL: &str = "sqlite:./data/workouts.db";
    /// Default logical database name
    pub const DATABASE_NAME: &str = "workout_tracker";
}

/// Listing limits
pub mod limits {
    /// Workouts returned when no `limit` is given
    pub const DEFAULT_WORKOUT_LIMIT: u32 = 50;
    /// Collection names reported by the diagnostic endpoint
    pub const DIAGNOSTIC_COLLECTIONS: usize = 10;
    /// Characters of a store error echoed by the diagnostic endpoint
    pub const DIAGNOSTIC_ERROR_CHARS: usize = 50;
}

/// Service identity
pub mod service_names {
    /// Service name used in logs
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
    /// Message returned by the root endpoint
    pub const ROOT_MESSAGE: &str = "Workout Tracker Backend Running";
}

/// Document field names shared by the store and the output boundary
pub mod fields {
    /// Store-native identifier field
    pub const NATIVE_ID: &str = "_id";
    /// Public identifier field
    pub const PUBLIC_ID: &str = "id";
    /// Insertion timestamp stamped by the store
    pub const CREATED_AT: &str = "created_at";
    /// Last-write timestamp stamped by the store
    pub const UPDATED_AT: &str = "updated_at";
    /// Workout timestamp used for ordering
    pub const PERFORMED_AT: &str = "performed_at";
}
