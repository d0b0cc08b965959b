// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates defaults, URL parsing, presence flags, and invalid value errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use workout_tracker::config::environment::{
    DatabaseUrl, Environment, LogLevel, ServerConfig,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
}

#[test]
fn test_database_url_parsing() {
    let file = DatabaseUrl::parse_url("sqlite:./test.db").unwrap();
    assert_eq!(
        file,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./test.db")
        }
    );
    assert_eq!(file.to_connection_string(), "sqlite:./test.db");

    assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
    assert!(!DatabaseUrl::parse_url("./some/path.db").unwrap().is_memory());
    assert!(DatabaseUrl::parse_url("mongodb://localhost:27017").is_err());
}

#[test]
fn test_defaults_when_environment_is_silent() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8000");
    assert_eq!(config.database.url, DatabaseUrl::default());
    assert_eq!(config.database.url.to_connection_string(), "sqlite:./data/workouts.db");
    assert_eq!(config.database.name, "workout_tracker");
    assert!(!config.database.url_from_env);
    assert!(!config.database.name_from_env);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
fn test_values_and_presence_flags_from_lookup() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("DATABASE_NAME", "gym"),
        ("PORT", "9100"),
        ("HOST", "127.0.0.1"),
        ("ENVIRONMENT", "production"),
    ]))
    .unwrap();

    assert!(config.database.url.is_memory());
    assert_eq!(config.database.name, "gym");
    assert!(config.database.url_from_env);
    assert!(config.database.name_from_env);
    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert!(config.environment.is_production());
}

#[test]
fn test_blank_values_count_as_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("DATABASE_NAME", "  "), ("PORT", "")])).unwrap();

    assert_eq!(config.database.name, "workout_tracker");
    assert!(!config.database.name_from_env);
    assert_eq!(config.http_port, 8000);
}

#[test]
fn test_invalid_port_is_an_error() {
    let error = ServerConfig::from_lookup(lookup(&[("PORT", "abc")])).unwrap_err();
    assert!(error.to_string().contains("PORT"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var("DATABASE_NAME", "from_process");
    env::set_var("PORT", "8123");

    let config = ServerConfig::from_env().unwrap();

    env::remove_var("DATABASE_NAME");
    env::remove_var("PORT");

    assert_eq!(config.database.name, "from_process");
    assert!(config.database.name_from_env);
    assert_eq!(config.http_port, 8123);
}
