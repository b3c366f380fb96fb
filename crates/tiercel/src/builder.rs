// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for tiered caches.
//!
//! The builder tracks in its type whether a tier has been added yet, so a cache with
//! no tiers cannot be built.

use std::{fmt, marker::PhantomData};

use tiercel_store::{DynamicStoreExt, Store};

use crate::tiered::{DEFAULT_CACHE_NAME, Tier, TieredCache};

mod sealed {
    pub trait Sealed {}
}

/// Marker for the state of a [`TieredCacheBuilder`].
///
/// This trait is sealed; its only implementors are [`NoTiers`] and [`HasTiers`].
pub trait BuilderState: sealed::Sealed {}

/// Builder state before any tier has been added.
#[derive(Debug)]
pub struct NoTiers;

/// Builder state once at least one tier has been added.
#[derive(Debug)]
pub struct HasTiers;

impl sealed::Sealed for NoTiers {}
impl sealed::Sealed for HasTiers {}
impl BuilderState for NoTiers {}
impl BuilderState for HasTiers {}

/// Builder for a [`TieredCache`].
///
/// Tiers are consulted in the order they are added.
///
/// # Examples
///
/// ```
/// use tiercel::{MemoryStore, TieredCache};
///
/// let shared = MemoryStore::new();
/// let cache = TieredCache::builder()
///     .name("messages")
///     .memory()
///     .tier("shared", shared)
///     .build();
///
/// assert_eq!(cache.tier_names().collect::<Vec<_>>(), ["memory", "shared"]);
/// ```
pub struct TieredCacheBuilder<S: BuilderState = NoTiers> {
    name: &'static str,
    tiers: Vec<Tier>,
    _state: PhantomData<S>,
}

impl TieredCacheBuilder<NoTiers> {
    pub(crate) fn new() -> Self {
        Self {
            name: DEFAULT_CACHE_NAME,
            tiers: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<S: BuilderState> TieredCacheBuilder<S> {
    /// Sets the cache name reported in `cache.event` logs.
    #[must_use]
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Appends a tier after the ones already added.
    #[must_use]
    pub fn tier<T>(mut self, name: &'static str, store: T) -> TieredCacheBuilder<HasTiers>
    where
        T: Store + 'static,
    {
        self.tiers.push(Tier {
            name,
            store: store.into_dynamic(),
        });

        TieredCacheBuilder {
            name: self.name,
            tiers: self.tiers,
            _state: PhantomData,
        }
    }

    /// Appends a fresh, unbounded in-memory tier named `memory`.
    #[cfg(feature = "memory")]
    #[must_use]
    pub fn memory(self) -> TieredCacheBuilder<HasTiers> {
        self.tier("memory", tiercel_memory::MemoryStore::new())
    }
}

impl TieredCacheBuilder<HasTiers> {
    /// Builds the cache. The tier list is fixed from here on.
    #[must_use]
    pub fn build(self) -> TieredCache {
        TieredCache::new(self.name, self.tiers)
    }
}

impl<S: BuilderState> fmt::Debug for TieredCacheBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TieredCacheBuilder")
            .field("name", &self.name)
            .field("tiers", &self.tiers.iter().map(|tier| tier.name).collect::<Vec<_>>())
            .finish()
    }
}
