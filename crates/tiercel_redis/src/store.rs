// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Redis store implementation.

use std::{borrow::Cow, fmt, sync::Arc};

use ohno::EnrichableExt;
use parking_lot::Mutex;
use redis::{AsyncCommands, RedisResult, aio::ConnectionLike, aio::MultiplexedConnection};
use tiercel_store::{Error, Store, ensure_entry};

use crate::builder::RedisStoreBuilder;

/// A store shared across processes through a Redis server.
///
/// Cloning a `RedisStore` is cheap and every clone uses the same connection. Once
/// [`close`](Self::close) has been called, reads report misses and writes fail with a
/// transport error.
///
/// The connection type defaults to Redis' multiplexed connection; any
/// [`ConnectionLike`] that can be cloned and shared between tasks works, which is how
/// the tests substitute an in-process fake.
pub struct RedisStore<C = MultiplexedConnection> {
    inner: Arc<Inner<C>>,
}

struct Inner<C> {
    connection: Mutex<Option<C>>,
    key_prefix: String,
}

impl RedisStore {
    /// Creates a builder for connecting a store.
    #[must_use]
    pub fn builder() -> RedisStoreBuilder {
        RedisStoreBuilder::new()
    }
}

impl<C> RedisStore<C> {
    /// Returns the prefix prepended to every key.
    #[must_use]
    pub fn key_prefix(&self) -> &str {
        &self.inner.key_prefix
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.connection.lock().is_none()
    }

    /// Releases the connection.
    ///
    /// Requests already in flight finish on their own copy of the connection. Closing an
    /// already closed store only logs a warning.
    pub fn close(&self) {
        if self.inner.connection.lock().take().is_some() {
            tracing::info!(redis.key_prefix = %self.inner.key_prefix, "redis connection closed");
        } else {
            tracing::warn!(redis.key_prefix = %self.inner.key_prefix, "redis connection already closed");
        }
    }
}

impl<C> RedisStore<C>
where
    C: ConnectionLike + Clone + Send + Sync + 'static,
{
    pub(crate) fn new(connection: C, key_prefix: String) -> Self {
        Self {
            inner: Arc::new(Inner {
                connection: Mutex::new(Some(connection)),
                key_prefix,
            }),
        }
    }

    /// Creates an unprefixed store over an existing connection.
    pub fn from_connection(connection: C) -> Self {
        Self::new(connection, String::new())
    }

    fn connection(&self) -> Option<C> {
        self.inner.connection.lock().clone()
    }

    fn prefixed<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.inner.key_prefix.is_empty() {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(format!("{}{key}", self.inner.key_prefix))
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut connection = self
            .connection()
            .ok_or_else(|| Error::transport("redis connection is closed"))?;

        let reply: RedisResult<()> = connection.set(self.prefixed(key).as_ref(), value).await;
        reply.map_err(Error::transport)
    }
}

impl<C> Clone for RedisStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> fmt::Debug for RedisStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("key_prefix", &self.inner.key_prefix)
            .field("closed", &self.inner.connection.lock().is_none())
            .finish_non_exhaustive()
    }
}

impl<C> Store for RedisStore<C>
where
    C: ConnectionLike + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<String> {
        let Some(mut connection) = self.connection() else {
            tracing::warn!(redis.key = key, "redis connection is closed, reporting miss");
            return None;
        };

        let key = self.prefixed(key);
        let reply: RedisResult<Option<String>> = connection.get(key.as_ref()).await;
        match reply {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(e) => {
                tracing::warn!(redis.key = %key, error = %e, "redis read failed, reporting miss");
                None
            }
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        ensure_entry(key, value)?;

        self.write(key, value)
            .await
            .map_err(|e| e.enrich_with(|| format!("setting value {value} for key {key}")))
    }
}
