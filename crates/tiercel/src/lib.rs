// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Content-addressed message cache over an ordered list of storage tiers.
//!
//! Messages are stored under the SHA-256 of their text, so an entry is never updated:
//! writing the same message twice writes the same key with the same value. That makes
//! a simple tiering policy safe without any coordination between processes.
//!
//! - [`TieredCache`] composes one or more [`Store`]s. Reads fall through the tiers in
//!   order; writes go to every tier in order and stop at the first failure.
//! - [`MessageCache`] is the message-level surface: `put(text) -> digest` and
//!   `get(digest) -> text`.
//! - [`digest()`] computes the key for a message.
//!
//! # Examples
//!
//! ```
//! use tiercel::{MessageCache, TieredCache};
//! # futures::executor::block_on(async {
//!
//! let cache = MessageCache::new(TieredCache::builder().name("messages").memory().build());
//!
//! let digest = cache.put("hello").await.unwrap();
//! assert_eq!(cache.get(digest.as_str()).await.as_deref(), Some("hello"));
//! assert_eq!(cache.get(&"0".repeat(64)).await, None);
//! # });
//! ```
//!
//! # Logging
//!
//! Every tier interaction emits a `cache.event` through `tracing` with the cache name,
//! tier name, operation, outcome and duration. Failures log at `ERROR`; everything else
//! at `DEBUG`.
//!
//! # Features
//!
//! - `memory` (default): enables [`TieredCacheBuilder::memory`].
//! - `test-util`: enables `tiercel_store::testing`.

pub mod builder;
pub mod digest;
pub mod message;
mod telemetry;
pub mod tiered;

#[doc(inline)]
pub use builder::TieredCacheBuilder;
#[doc(inline)]
pub use digest::{Digest, ParseDigestError, digest};
#[doc(inline)]
pub use message::MessageCache;
#[doc(inline)]
pub use tiered::TieredCache;
#[doc(inline)]
pub use tiercel_store::{DynamicStore, DynamicStoreExt, Error, ErrorKind, Result, Store};
#[cfg(feature = "memory")]
#[doc(inline)]
pub use tiercel_memory::MemoryStore;
