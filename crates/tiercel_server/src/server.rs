// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Startup, serving and shutdown.

use anyhow::{Context, Result};
use tiercel::{MessageCache, TieredCache};
use tiercel_redis::RedisStore;
use tokio::net::TcpListener;

use crate::{config::Config, routes};

const CACHE_NAME: &str = "messages";

/// Serves until Ctrl-C or SIGTERM, then releases the Redis connection.
pub(crate) async fn run(config: Config) -> Result<()> {
    let (cache, redis) = build_cache(&config).await?;
    serve_then_close(&config, cache, redis).await
}

/// Closes `redis` once serving ends, whether it ended normally or with an error.
async fn serve_then_close<C>(config: &Config, cache: MessageCache, redis: Option<RedisStore<C>>) -> Result<()> {
    let served = serve(config, cache).await;

    if let Some(redis) = redis {
        redis.close();
    }

    served
}

async fn build_cache(config: &Config) -> Result<(MessageCache, Option<RedisStore>)> {
    if config.memory_only {
        tracing::info!("serving from the memory tier only");
        let cache = TieredCache::builder().name(CACHE_NAME).memory().build();
        return Ok((MessageCache::new(cache), None));
    }

    let redis = RedisStore::builder()
        .key_prefix(&config.key_prefix)
        .connect(&config.redis_url)
        .await
        .context("connecting to redis")?;

    let cache = TieredCache::builder()
        .name(CACHE_NAME)
        .memory()
        .tier("redis", redis.clone())
        .build();

    Ok((MessageCache::new(cache), Some(redis)))
}

async fn serve(config: &Config, cache: MessageCache) -> Result<()> {
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;

    tracing::info!(listen = %config.listen, "accepting connections");

    axum::serve(listener, routes::router(cache))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
///
/// The SIGTERM handler is installed by this call, before the returned future is polled.
fn shutdown_signal() -> impl Future<Output = ()> + Send {
    let terminate = terminate();

    async move {
        tokio::select! {
            () = interrupt() => {}
            () = terminate => {}
        }
    }
}

async fn interrupt() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received SIGINT, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
fn terminate() -> impl Future<Output = ()> + Send {
    use tokio::signal::unix::{SignalKind, signal};

    let sigterm = signal(SignalKind::terminate());

    async move {
        match sigterm {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(not(unix))]
fn terminate() -> impl Future<Output = ()> + Send {
    std::future::pending()
}
