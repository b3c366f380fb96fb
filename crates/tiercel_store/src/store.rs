// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The core trait for key/value stores.
//!
//! [`Store`] is deliberately small: one lookup and one write. Composition (ordering,
//! fallback, fanout) lives in `tiercel`, which treats every tier as a `Store`.

use crate::Error;

/// Trait for store implementations.
///
/// `get` and `put` are required. `len` and `is_empty` have default implementations:
/// - `len`: returns `None` (not every store can count its entries)
/// - `is_empty`: delegates to `len`
#[dynosaur::dynosaur(pub(crate) DynStore = dyn(box) Store, bridge(none))]
pub trait Store: Send + Sync {
    /// Looks up the value stored under `key`.
    ///
    /// Returns `None` when the key is absent. Implementations must not surface read
    /// failures; a failed read is logged and reported as `None`.
    fn get(&self, key: &str) -> impl Future<Output = Option<String>> + Send;

    /// Stores `value` under `key`.
    ///
    /// Fails with a validation error if either is empty, and with a transport error if
    /// the backing store cannot complete the write.
    fn put(&self, key: &str, value: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// Returns the number of entries, if supported.
    fn len(&self) -> Option<u64> {
        None
    }

    /// Returns `true` if the store holds no entries.
    ///
    /// Returns `None` for implementations that don't track size.
    fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

/// Checks that an entry may be written: neither key nor value may be empty.
///
/// Every [`Store::put`] implementation calls this before writing.
///
/// # Errors
///
/// Returns a validation error if `key` or `value` is empty.
///
/// # Examples
///
/// ```
/// use tiercel_store::ensure_entry;
///
/// assert!(ensure_entry("77af", "cat").is_ok());
/// assert!(ensure_entry("", "cat").is_err());
/// assert!(ensure_entry("77af", "").is_err());
/// ```
pub fn ensure_entry(key: &str, value: &str) -> Result<(), Error> {
    if key.is_empty() || value.is_empty() {
        return Err(Error::empty_entry());
    }
    Ok(())
}
