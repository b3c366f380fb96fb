// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for configuring memory stores.
//!
//! Keeps moka's configuration types out of the public API.

use crate::store::MemoryStore;

/// Builder for configuring a `MemoryStore`.
///
/// # Examples
///
/// ```
/// use tiercel_memory::MemoryStore;
///
/// let store = MemoryStore::builder()
///     .initial_capacity(1024)
///     .name("messages")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    pub(crate) initial_capacity: Option<usize>,
    pub(crate) name: Option<String>,
}

impl MemoryStoreBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity (pre-allocation hint).
    ///
    /// The store still grows without bound past this size.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Sets a name for the store.
    ///
    /// The name may appear in debugging output from the underlying map.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the configured `MemoryStore`.
    #[must_use]
    pub fn build(self) -> MemoryStore {
        MemoryStore::from_builder(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_settings() {
        let builder = MemoryStoreBuilder::new().initial_capacity(16).name("messages");
        assert_eq!(builder.initial_capacity, Some(16));
        assert_eq!(builder.name.as_deref(), Some("messages"));
    }

    #[test]
    fn default_builder_has_no_settings() {
        let builder = MemoryStoreBuilder::default();
        assert!(builder.initial_capacity.is_none());
        assert!(builder.name.is_none());
    }
}
