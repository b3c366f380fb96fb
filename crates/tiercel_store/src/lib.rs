// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The key/value contract every tiercel cache tier satisfies.
//!
//! This crate defines the [`Store`] trait, the [`Error`] type returned by writes, and
//! [`DynamicStore`], a type-erased handle that lets stores of different concrete types
//! sit side by side in one ordered tier list.
//!
//! # Contract
//!
//! - [`Store::get`] never fails. A missing key, and any failure to read, is reported as `None`.
//! - [`Store::put`] rejects an empty key or an empty value with an
//!   [`ErrorKind::Validation`] error before touching storage. Backends that talk to the
//!   network report failed writes as [`ErrorKind::Transport`].
//! - Entries are never updated or deleted. Keys are content digests, so two writes to the
//!   same key always carry the same value.
//!
//! # Implementing a Store
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::RwLock;
//!
//! use tiercel_store::{Error, Store, ensure_entry};
//!
//! struct SimpleStore(RwLock<HashMap<String, String>>);
//!
//! impl Store for SimpleStore {
//!     async fn get(&self, key: &str) -> Option<String> {
//!         self.0.read().ok()?.get(key).cloned()
//!     }
//!
//!     async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
//!         ensure_entry(key, value)?;
//!         self.0
//!             .write()
//!             .map_err(|e| Error::transport(e.to_string()))?
//!             .insert(key.to_owned(), value.to_owned());
//!         Ok(())
//!     }
//! }
//! ```

mod dynamic;
pub mod error;
mod store;
#[cfg(any(feature = "test-util", test))]
pub mod testing;

#[doc(inline)]
pub use dynamic::{DynamicStore, DynamicStoreExt};
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use store::{Store, ensure_entry};
