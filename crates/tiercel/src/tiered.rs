// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Multi-tier store composition.
//!
//! A [`TieredCache`] reads from its tiers in order until one has the key, and writes to
//! every tier in order, stopping at the first failure.

use std::{fmt, sync::Arc, time::Instant};

use tiercel_store::{DynamicStore, Error, Store, ensure_entry};

use crate::{
    builder::TieredCacheBuilder,
    telemetry::{self, CacheActivity, CacheOperation},
};

/// Name used in `cache.event` logs when none is configured.
pub const DEFAULT_CACHE_NAME: &str = "tiercel";

pub(crate) struct Tier {
    pub(crate) name: &'static str,
    pub(crate) store: DynamicStore,
}

struct TieredCacheInner {
    name: &'static str,
    tiers: Vec<Tier>,
}

/// An ordered, fixed list of stores acting as one store.
///
/// List fast, local tiers first: reads stop at the first tier holding the key, so most
/// lookups never reach the slower tiers behind it.
///
/// # Reads
///
/// Each tier is asked in turn and the first non-empty value wins. A hit in a later
/// tier is *not* copied into the earlier tiers.
///
/// # Writes
///
/// Every tier is written in order. The first failure is returned unchanged and the
/// remaining tiers are not attempted; tiers already written keep the entry. Because keys
/// are content digests, writing the same entry again after a failure reconciles the
/// tiers.
///
/// # Examples
///
/// ```
/// use tiercel::TieredCache;
/// use tiercel_store::Store;
/// # futures::executor::block_on(async {
///
/// let cache = TieredCache::builder().name("messages").memory().build();
///
/// cache.put("key", "value").await.unwrap();
/// assert_eq!(cache.get("key").await.as_deref(), Some("value"));
/// # });
/// ```
#[derive(Clone)]
pub struct TieredCache {
    inner: Arc<TieredCacheInner>,
}

impl TieredCache {
    /// Creates a builder for a tiered cache.
    #[must_use]
    pub fn builder() -> TieredCacheBuilder {
        TieredCacheBuilder::new()
    }

    pub(crate) fn new(name: &'static str, tiers: Vec<Tier>) -> Self {
        Self {
            inner: Arc::new(TieredCacheInner { name, tiers }),
        }
    }

    /// Returns the name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Returns the number of tiers; always at least one.
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.inner.tiers.len()
    }

    /// Returns the tier names in lookup order.
    pub fn tier_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.tiers.iter().map(|tier| tier.name)
    }
}

impl fmt::Debug for TieredCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TieredCache")
            .field("name", &self.inner.name)
            .field("tiers", &self.tier_names().collect::<Vec<_>>())
            .finish()
    }
}

impl Store for TieredCache {
    async fn get(&self, key: &str) -> Option<String> {
        for tier in &self.inner.tiers {
            let started = Instant::now();
            let value = tier.store.get(key).await.filter(|value| !value.is_empty());

            let activity = if value.is_some() { CacheActivity::Hit } else { CacheActivity::Miss };
            telemetry::record(self.inner.name, tier.name, CacheOperation::Get, activity, started.elapsed());

            if value.is_some() {
                return value;
            }
        }

        None
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        ensure_entry(key, value)?;

        for tier in &self.inner.tiers {
            let started = Instant::now();
            if let Err(e) = tier.store.put(key, value).await {
                telemetry::record(self.inner.name, tier.name, CacheOperation::Put, CacheActivity::Error, started.elapsed());
                return Err(e);
            }
            telemetry::record(self.inner.name, tier.name, CacheOperation::Put, CacheActivity::Inserted, started.elapsed());
        }

        Ok(())
    }

    /// Reports the size of the first tier, which holds every entry written through it.
    fn len(&self) -> Option<u64> {
        self.inner.tiers.first().and_then(|tier| tier.store.len())
    }
}
