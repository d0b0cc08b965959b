// ABOUTME: Server binary for the workout tracker HTTP API
// ABOUTME: Loads configuration, initializes logging, connects the store, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Tracker Server Binary
//!
//! Starts the exercise catalog and workout log API.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use workout_tracker::{
    config::environment::ServerConfig, database_plugins::connect_store, logging,
    resources::ServerResources, server,
};

#[derive(Parser)]
#[command(name = "workout-tracker-server")]
#[command(about = "Workout Tracker API - exercise catalog and workout log over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_for_server(&config)?;

    info!("Starting Workout Tracker API");
    info!("{}", config.summary());

    let store = connect_store(&config.database)
        .await
        .context("Failed to connect to the document store")?;
    info!("Document store initialized: {}", store.backend_info());

    let resources = Arc::new(ServerResources::new(store, Arc::new(config)));

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
