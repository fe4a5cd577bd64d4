// ABOUTME: Server binary wiring configuration, storage, clients, and the HTTP listener
// ABOUTME: Production entry point for the Okawari suggestion backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Okawari Server Binary
//!
//! Starts the suggestion backend: loads environment configuration,
//! initializes logging and the SQLite stores, builds the recipe feed and
//! Gemini clients, and serves the HTTP API.

use anyhow::Result;
use clap::Parser;
use okawari_server::{
    config::environment::ServerConfig,
    database::Database,
    external::RecipeFeedClient,
    llm::GeminiProvider,
    logging,
    resources::ServerResources,
    routes,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "okawari-server")]
#[command(about = "Okawari API - ingredient-aware recipe suggestion backend")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Okawari Suggest Server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;

    let feed = Arc::new(RecipeFeedClient::new(config.feed.clone()));

    let mut gemini = GeminiProvider::from_env()?
        .with_timeout(Duration::from_secs(config.llm.timeout_secs));
    if let Some(model) = config.llm.model.clone() {
        gemini = gemini.with_default_model(model);
    }
    let llm = Arc::new(gemini);

    let resources = Arc::new(ServerResources::new(database, feed, llm, config.clone()));
    let app = routes::router(resources);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to install Ctrl-C handler");
    }
    info!("Shutdown signal received");
}
