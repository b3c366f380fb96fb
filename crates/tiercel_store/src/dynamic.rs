// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Type-erased store handle.

use std::{fmt::Debug, sync::Arc};

use crate::{Error, Store, store::DynStore};

/// Extension trait for converting any `Store` into a `DynamicStore`.
///
/// Implemented automatically for every `Store`.
///
/// # Examples
///
/// ```
/// use tiercel_store::{DynamicStore, DynamicStoreExt, Store};
///
/// fn erase<S>(store: S) -> DynamicStore
/// where
///     S: Store + 'static,
/// {
///     store.into_dynamic()
/// }
/// ```
pub trait DynamicStoreExt: Sized {
    /// Converts this store into a `DynamicStore`.
    fn into_dynamic(self) -> DynamicStore;
}

impl<S> DynamicStoreExt for S
where
    S: Store + 'static,
{
    fn into_dynamic(self) -> DynamicStore {
        DynamicStore::new(self)
    }
}

/// A clonable store handle with type erasure.
///
/// Wraps a trait object in an `Arc`, so stores of different concrete types can share
/// one ordered tier list and be cloned freely.
pub struct DynamicStore(Arc<DynStore<'static>>);

impl DynamicStore {
    pub(crate) fn new<S>(store: S) -> Self
    where
        S: Store + 'static,
    {
        Self(DynStore::new_arc(store))
    }
}

impl Debug for DynamicStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicStore").finish_non_exhaustive()
    }
}

impl Clone for DynamicStore {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl Store for DynamicStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        self.0.put(key, value).await
    }

    fn len(&self) -> Option<u64> {
        self.0.len()
    }

    fn is_empty(&self) -> Option<bool> {
        self.0.is_empty()
    }
}
