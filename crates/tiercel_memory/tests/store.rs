// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for `MemoryStore`.

use std::sync::Arc;

use tiercel_memory::{MemoryStore, MemoryStoreBuilder};
use tiercel_store::Store;

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

#[test]
fn new_creates_empty_store() {
    let store = MemoryStore::new();
    assert_eq!(store.len(), Some(0));
    assert_eq!(store.is_empty(), Some(true));
}

#[test]
fn default_creates_empty_store() {
    let store = MemoryStore::default();
    assert_eq!(store.len(), Some(0));
}

#[test]
fn get_returns_none_for_missing_key() {
    block_on(async {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.is_none());
    });
}

#[test]
fn put_and_get_returns_value() {
    block_on(async {
        let store = MemoryStore::new();
        store.put("key", "value").await.expect("put failed");
        assert_eq!(store.get("key").await.as_deref(), Some("value"));
    });
}

#[test]
fn repeated_put_of_same_entry_succeeds() {
    block_on(async {
        let store = MemoryStore::new();
        store.put("key", "value").await.expect("first put failed");
        store.put("key", "value").await.expect("second put failed");
        assert_eq!(store.get("key").await.as_deref(), Some("value"));
    });
}

#[test]
fn put_rejects_empty_key() {
    block_on(async {
        let store = MemoryStore::new();
        let error = store.put("", "value").await.expect_err("empty key accepted");
        assert!(error.is_validation());
    });
}

#[test]
fn put_rejects_empty_value() {
    block_on(async {
        let store = MemoryStore::new();
        let error = store.put("key", "").await.expect_err("empty value accepted");
        assert!(error.is_validation());
        assert!(store.get("key").await.is_none());
    });
}

#[test]
fn clones_share_entries() {
    block_on(async {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.put("key", "value").await.expect("put failed");
        assert!(clone.contains_key("key"));
        assert_eq!(clone.get("key").await.as_deref(), Some("value"));
    });
}

#[test]
fn separate_stores_do_not_share_entries() {
    block_on(async {
        let first = MemoryStore::new();
        let second = MemoryStore::new();
        first.put("key", "value").await.expect("put failed");
        assert!(second.get("key").await.is_none());
    });
}

#[test]
fn builder_with_initial_capacity_creates_empty_store() {
    let store = MemoryStoreBuilder::new().initial_capacity(128).build();
    assert_eq!(store.len(), Some(0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_and_readers() {
    let store = Arc::new(MemoryStore::new());
    let mut handles = Vec::new();

    for worker in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            for i in 0..50 {
                let key = format!("key-{i}");
                let value = format!("value-{i}");
                store.put(&key, &value).await.expect("put failed");
                // Any worker may have written this key; the value is the same either way.
                assert_eq!(store.get(&key).await.as_deref(), Some(value.as_str()), "worker {worker}");
            }
        }));
    }

    for handle in handles {
        handle.await.expect("worker panicked");
    }

    for i in 0..50 {
        assert!(store.contains_key(&format!("key-{i}")));
    }
}
