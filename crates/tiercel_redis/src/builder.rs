// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for connecting Redis stores.

use ohno::EnrichableExt;
use redis::aio::ConnectionLike;
use tiercel_store::Error;

use crate::store::RedisStore;

/// Builder for configuring a `RedisStore`.
///
/// # Examples
///
/// ```no_run
/// use tiercel_redis::RedisStore;
///
/// # async fn example() -> Result<(), tiercel_store::Error> {
/// let store = RedisStore::builder()
///     .key_prefix("messages:")
///     .connect("redis://redis:6379")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RedisStoreBuilder {
    key_prefix: String,
}

impl RedisStoreBuilder {
    /// Creates a new builder with no key prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prefix prepended to every key.
    ///
    /// Use this to namespace entries when the Redis instance is shared with other
    /// applications. Callers always pass and receive unprefixed keys.
    #[must_use]
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Opens one multiplexed connection to the Redis server at `url`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the URL is invalid or the server cannot be reached.
    pub async fn connect(self, url: &str) -> Result<RedisStore, Error> {
        let client = redis::Client::open(url).map_err(|e| Error::transport(e).enrich("parsing redis connection url"))?;
        let addr = client.get_connection_info().addr.to_string();

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::transport(e).enrich_with(|| format!("connecting to redis at {addr}")))?;

        tracing::info!(redis.addr = %addr, redis.key_prefix = %self.key_prefix, "connected to redis");
        Ok(self.build(connection))
    }

    /// Builds a store over an already established connection.
    pub fn build<C>(self, connection: C) -> RedisStore<C>
    where
        C: ConnectionLike + Clone + Send + Sync + 'static,
    {
        RedisStore::new(connection, self.key_prefix)
    }
}
