// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Mock store for testing.
//!
//! [`MockStore`] is an in-memory store that records every operation and can be told to
//! fail, for exercising fallback and partial-write paths.

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::{Error, Store, ensure_entry};

/// Recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// A lookup of the given key.
    Get(String),
    /// A write of the given entry.
    Put {
        /// The key that was written.
        key: String,
        /// The value that was written.
        value: String,
    },
}

type FailPredicate = Box<dyn Fn(&StoreOp) -> bool + Send + Sync>;

/// A configurable mock store for testing.
///
/// Stores values in memory, records all operations, and can be configured to fail on
/// demand. A failing `put` returns a transport error; a failing `get` behaves the way a
/// real backend's read failure does and reports the key as absent.
///
/// # Examples
///
/// ```
/// use tiercel_store::{Store, testing::{MockStore, StoreOp}};
///
/// # futures::executor::block_on(async {
/// let store = MockStore::new();
///
/// store.put("key", "value").await.unwrap();
/// assert_eq!(store.get("key").await.as_deref(), Some("value"));
///
/// assert_eq!(store.operations(), vec![
///     StoreOp::Put { key: "key".to_string(), value: "value".to_string() },
///     StoreOp::Get("key".to_string()),
/// ]);
/// # });
/// ```
///
/// # Failure Injection
///
/// ```
/// use tiercel_store::{Store, testing::{MockStore, StoreOp}};
///
/// # futures::executor::block_on(async {
/// let store = MockStore::new();
///
/// store.fail_when(|op| matches!(op, StoreOp::Put { .. }));
/// assert!(store.put("key", "value").await.is_err());
///
/// store.clear_failures();
/// assert!(store.put("key", "value").await.is_ok());
/// # });
/// ```
pub struct MockStore {
    data: Arc<Mutex<HashMap<String, String>>>,
    operations: Arc<Mutex<Vec<StoreOp>>>,
    fail_when: Arc<Mutex<Option<FailPredicate>>>,
}

impl std::fmt::Debug for MockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockStore")
            .field("data", &self.data)
            .field("operations", &self.operations)
            .field("fail_when", &self.fail_when.lock().is_some())
            .finish()
    }
}

impl Clone for MockStore {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            operations: Arc::clone(&self.operations),
            fail_when: Arc::clone(&self.fail_when),
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_data(HashMap::new())
    }

    /// Creates a mock store with pre-populated entries.
    #[must_use]
    pub fn with_data(data: HashMap<String, String>) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
            operations: Arc::new(Mutex::new(Vec::new())),
            fail_when: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the number of entries in the store.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data.lock().len()
    }

    /// Returns true if the store contains the given key.
    ///
    /// Does not record an operation.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.lock().contains_key(key)
    }

    /// Sets a predicate that decides which operations fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiercel_store::testing::{MockStore, StoreOp};
    ///
    /// let store = MockStore::new();
    ///
    /// // Fail everything
    /// store.fail_when(|_| true);
    ///
    /// // Fail only writes of a specific key
    /// store.fail_when(|op| matches!(op, StoreOp::Put { key, .. } if key == "bad_key"));
    /// ```
    pub fn fail_when<F>(&self, predicate: F)
    where
        F: Fn(&StoreOp) -> bool + Send + Sync + 'static,
    {
        *self.fail_when.lock() = Some(Box::new(predicate));
    }

    /// Clears the failure predicate, allowing all operations to succeed.
    pub fn clear_failures(&self) {
        *self.fail_when.lock() = None;
    }

    /// Returns a clone of all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<StoreOp> {
        self.operations.lock().clone()
    }

    /// Clears all recorded operations.
    pub fn clear_operations(&self) {
        self.operations.lock().clear();
    }

    fn record(&self, op: StoreOp) {
        self.operations.lock().push(op);
    }

    fn should_fail(&self, op: &StoreOp) -> bool {
        self.fail_when.lock().as_ref().is_some_and(|predicate| predicate(op))
    }
}

impl Store for MockStore {
    async fn get(&self, key: &str) -> Option<String> {
        let op = StoreOp::Get(key.to_owned());
        let fail = self.should_fail(&op);
        self.record(op);
        if fail {
            return None;
        }
        self.data.lock().get(key).cloned()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        let op = StoreOp::Put {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        let fail = self.should_fail(&op);
        self.record(op);
        ensure_entry(key, value)?;
        if fail {
            return Err(Error::transport("mock: put failed"));
        }
        self.data.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn len(&self) -> Option<u64> {
        Some(self.data.lock().len() as u64)
    }
}
