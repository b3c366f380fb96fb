// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;

/// Stores messages under their SHA-256 digest, in memory and in Redis.
#[derive(Parser, Debug, Clone)]
#[command(name = "tiercel-server", version)]
pub(crate) struct Config {
    /// Address to accept HTTP connections on
    #[arg(long, env = "TIERCEL_LISTEN", default_value = "0.0.0.0:8000", value_name = "ADDR")]
    pub(crate) listen: SocketAddr,

    /// Redis server backing the shared tier
    #[arg(long, env = "TIERCEL_REDIS_URL", default_value = "redis://redis:6379", value_name = "URL")]
    pub(crate) redis_url: String,

    /// Prefix for every key written to Redis
    #[arg(long, env = "TIERCEL_KEY_PREFIX", default_value = "", value_name = "PREFIX")]
    pub(crate) key_prefix: String,

    /// Serve from the in-process tier only, without connecting to Redis
    #[arg(long, env = "TIERCEL_MEMORY_ONLY")]
    pub(crate) memory_only: bool,
}
