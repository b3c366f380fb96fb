// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HTTP service that stores messages under their SHA-256 digest.
//!
//! ```text
//! POST /messages            {"message": "cat"}  ->  {"digest": "77af..."}
//! GET  /messages/{digest}                       ->  {"message": "cat"}
//! ```
//!
//! Messages are kept in an in-process tier in front of a shared Redis tier, so several
//! instances behind a load balancer answer for each other's digests. Run with
//! `--memory-only` to skip Redis.
//!
//! Logging honors `RUST_LOG` and defaults to `info`.

mod config;
mod routes;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging()?;

    server::run(config).await
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("installing the log subscriber")
}
