// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Shared store backed by a single Redis connection.
//!
//! [`RedisStore`] lets several service instances see each other's entries. It holds one
//! multiplexed connection that every task shares; commands from concurrent callers are
//! pipelined over it without interfering.
//!
//! Reads never fail: a missing key, an empty reply, a reply that is not a string, and a
//! transport error all come back as `None` (the last two are logged). Writes report
//! transport errors with the key and value attached.
//!
//! The process that connects the store owns the connection and calls
//! [`RedisStore::close`] once during shutdown.
//!
//! # Examples
//!
//! ```no_run
//! use tiercel_redis::RedisStore;
//! use tiercel_store::Store;
//!
//! # async fn example() -> Result<(), tiercel_store::Error> {
//! let store = RedisStore::builder()
//!     .key_prefix("tiercel:")
//!     .connect("redis://127.0.0.1:6379")
//!     .await?;
//!
//! store.put("77af", "cat").await?;
//! assert_eq!(store.get("77af").await.as_deref(), Some("cat"));
//!
//! store.close();
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod store;
#[cfg(any(feature = "test-util", test))]
pub mod testing;

#[doc(inline)]
pub use builder::RedisStoreBuilder;
#[doc(inline)]
pub use store::RedisStore;
