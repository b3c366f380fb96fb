// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for read fallback and write fanout across tiers.

use tiercel::{ErrorKind, Store, TieredCache};
use tiercel_redis::{
    RedisStore,
    testing::{FakeConnection, FakeMode},
};
use tiercel_store::testing::{MockStore, StoreOp};

fn block_on<F: Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

fn put_op(key: &str, value: &str) -> StoreOp {
    StoreOp::Put {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn fallback_finds_entry_in_second_tier() {
    let near = MockStore::new();
    let far = MockStore::new();
    block_on(far.put("d", "m")).unwrap();

    let cache = TieredCache::builder().tier("near", near.clone()).tier("far", far).build();

    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
}

#[test]
fn fallback_hit_is_not_promoted() {
    let near = MockStore::new();
    let far = MockStore::new();
    block_on(far.put("d", "m")).unwrap();

    let cache = TieredCache::builder().tier("near", near.clone()).tier("far", far).build();

    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));

    assert!(!near.contains_key("d"));
    assert!(near.operations().iter().all(|op| matches!(op, StoreOp::Get(_))));
}

#[test]
fn failing_read_in_first_tier_falls_through() {
    let near = MockStore::new();
    let far = MockStore::new();
    block_on(near.put("d", "m")).unwrap();
    block_on(far.put("d", "m")).unwrap();
    near.fail_when(|op| matches!(op, StoreOp::Get(_)));

    let cache = TieredCache::builder().tier("near", near).tier("far", far).build();

    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
}

#[test]
fn partial_write_failure_keeps_first_tier() {
    let near = MockStore::new();
    let far = MockStore::new();
    far.fail_when(|op| matches!(op, StoreOp::Put { .. }));

    let cache = TieredCache::builder().tier("near", near.clone()).tier("far", far.clone()).build();

    let error = block_on(cache.put("d", "m")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);

    assert!(near.contains_key("d"));
    assert!(!far.contains_key("d"));
    assert_eq!(far.operations(), vec![put_op("d", "m")]);
}

#[test]
fn first_tier_failure_stops_the_fanout() {
    let near = MockStore::new();
    let far = MockStore::new();
    near.fail_when(|op| matches!(op, StoreOp::Put { .. }));

    let cache = TieredCache::builder().tier("near", near).tier("far", far.clone()).build();

    assert!(block_on(cache.put("d", "m")).is_err());
    assert!(far.operations().is_empty());
}

#[test]
fn retry_after_partial_failure_reconciles() {
    let near = MockStore::new();
    let far = MockStore::new();
    far.fail_when(|op| matches!(op, StoreOp::Put { .. }));

    let cache = TieredCache::builder().tier("near", near.clone()).tier("far", far.clone()).build();
    assert!(block_on(cache.put("d", "m")).is_err());

    far.clear_failures();
    block_on(cache.put("d", "m")).unwrap();

    assert!(near.contains_key("d"));
    assert!(far.contains_key("d"));
    assert_eq!(near.entry_count(), 1);
}

#[test]
fn single_tier_passes_through() {
    let only = MockStore::new();
    let cache = TieredCache::builder().tier("only", only.clone()).build();

    block_on(cache.put("d", "m")).unwrap();
    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
    assert_eq!(block_on(cache.get("missing")), None);

    assert_eq!(
        only.operations(),
        vec![put_op("d", "m"), StoreOp::Get("d".to_string()), StoreOp::Get("missing".to_string())]
    );
}

#[test]
fn memory_in_front_of_redis() {
    let connection = FakeConnection::new();
    let redis = RedisStore::builder().key_prefix("tiercel:").build(connection.clone());

    let cache = TieredCache::builder().memory().tier("redis", redis).build();

    block_on(cache.put("d", "m")).unwrap();
    assert!(connection.contains_key("tiercel:d"));
    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
}

#[test]
fn other_instance_sees_shared_tier() {
    let connection = FakeConnection::new();
    let writer = TieredCache::builder()
        .memory()
        .tier("redis", RedisStore::from_connection(connection.clone()))
        .build();
    let reader = TieredCache::builder()
        .memory()
        .tier("redis", RedisStore::from_connection(connection))
        .build();

    block_on(writer.put("d", "m")).unwrap();
    assert_eq!(block_on(reader.get("d")).as_deref(), Some("m"));
}

#[test]
fn unreachable_shared_tier_degrades_reads_and_fails_writes() {
    let connection = FakeConnection::new();
    let cache = TieredCache::builder()
        .memory()
        .tier("redis", RedisStore::from_connection(connection.clone()))
        .build();

    block_on(cache.put("d", "m")).unwrap();
    connection.set_mode(FakeMode::Unreachable);

    // the memory tier still answers
    assert_eq!(block_on(cache.get("d")).as_deref(), Some("m"));
    assert_eq!(block_on(cache.get("other")), None);

    let error = block_on(cache.put("e", "n")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(block_on(cache.get("e")).as_deref(), Some("n"));
}

#[test]
fn closed_shared_tier_fails_writes() {
    let redis = RedisStore::from_connection(FakeConnection::new());
    let cache = TieredCache::builder().memory().tier("redis", redis.clone()).build();

    redis.close();

    let error = block_on(cache.put("d", "m")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);
}
