// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for `Store` trait default implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use tiercel_store::{DynamicStoreExt, Error, Store, ensure_entry};

/// Minimal implementation that only provides required methods
struct MinimalStore {
    data: Mutex<HashMap<String, String>>,
}

impl MinimalStore {
    fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Store for MinimalStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.data.lock().expect("lock poisoned").get(key).cloned()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        ensure_entry(key, value)?;
        self.data.lock().expect("lock poisoned").insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[tokio::test]
async fn minimal_store_get_miss() {
    let store = MinimalStore::new();
    assert!(store.get("key").await.is_none());
}

#[tokio::test]
async fn minimal_store_get_hit() {
    let store = MinimalStore::new();
    store.put("key", "value").await.expect("error on put");
    assert_eq!(store.get("key").await.as_deref(), Some("value"));
}

#[tokio::test]
async fn minimal_store_rejects_empty_entry() {
    let store = MinimalStore::new();
    assert!(store.put("", "value").await.expect_err("empty key").is_validation());
    assert!(store.put("key", "").await.expect_err("empty value").is_validation());
    assert!(store.get("").await.is_none());
}

#[tokio::test]
async fn repeated_put_is_idempotent() {
    let store = MinimalStore::new();
    store.put("key", "value").await.expect("first put");
    store.put("key", "value").await.expect("second put");
    assert_eq!(store.get("key").await.as_deref(), Some("value"));
}

#[test]
fn default_len_returns_none() {
    let store = MinimalStore::new();
    assert_eq!(store.len(), None);
}

#[test]
fn default_is_empty_returns_none() {
    let store = MinimalStore::new();
    assert_eq!(store.is_empty(), None);
}

#[tokio::test]
async fn dynamic_wrapper_keeps_default_len() {
    let store = MinimalStore::new().into_dynamic();
    store.put("key", "value").await.expect("error on put");
    assert_eq!(store.len(), None);
    assert_eq!(store.get("key").await.as_deref(), Some("value"));
}
