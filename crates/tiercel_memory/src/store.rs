// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-memory store implementation using moka.

use moka::future::Cache;
use tiercel_store::{Error, Store, ensure_entry};

use crate::builder::MemoryStoreBuilder;

/// An unbounded, process-local store backed by moka.
///
/// Cloning is cheap and every clone shares the same entries.
///
/// # Examples
///
/// ```
/// use tiercel_memory::MemoryStore;
/// use tiercel_store::Store;
/// # futures::executor::block_on(async {
///
/// let store = MemoryStore::new();
///
/// store.put("key", "value").await.unwrap();
/// assert_eq!(store.get("key").await.as_deref(), Some("value"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Cache<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new unbounded memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for configuring a memory store.
    #[must_use]
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::new()
    }

    /// Returns `true` if an entry exists for `key`.
    ///
    /// Unlike [`Store::len`], this reflects writes immediately.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub(crate) fn from_builder(builder: &MemoryStoreBuilder) -> Self {
        let mut moka_builder = Cache::builder();

        if let Some(capacity) = builder.initial_capacity {
            moka_builder = moka_builder.initial_capacity(capacity);
        }

        if let Some(name) = builder.name.as_deref() {
            moka_builder = moka_builder.name(name);
        }

        Self {
            inner: moka_builder.build(),
        }
    }
}

impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        ensure_entry(key, value)?;
        // Same key always carries the same value, so overwriting is harmless.
        self.inner.insert(key.to_owned(), value.to_owned()).await;
        Ok(())
    }

    /// Approximate: moka applies pending writes to its counters lazily.
    fn len(&self) -> Option<u64> {
        Some(self.inner.entry_count())
    }
}
