// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Process-local store backed by moka.
//!
//! [`MemoryStore`] keeps entries for the lifetime of the process. It has no capacity
//! bound and no expiry: entries are content-addressed and immutable, so there is nothing
//! to refresh and nothing to evict. Concurrent readers and writers are safe; moka guards
//! the map internally.
//!
//! # Quick Start
//!
//! ```
//! use tiercel_memory::MemoryStore;
//! use tiercel_store::Store;
//!
//! # futures::executor::block_on(async {
//! let store = MemoryStore::builder().name("messages").build();
//!
//! store.put("key", "value").await?;
//! assert_eq!(store.get("key").await.as_deref(), Some("value"));
//! # Ok::<(), tiercel_store::Error>(())
//! # });
//! ```

pub mod builder;
pub mod store;

#[doc(inline)]
pub use builder::MemoryStoreBuilder;
#[doc(inline)]
pub use store::MemoryStore;
