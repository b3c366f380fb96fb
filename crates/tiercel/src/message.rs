// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Message-level API over a store.

use tiercel_store::{Error, Store};

use crate::{TieredCache, digest::Digest};

/// Stores messages under their own digest.
///
/// This is the surface a request handler talks to: it hands over message text and gets
/// back the digest, or hands over a digest and gets back the text.
///
/// # Examples
///
/// ```
/// use tiercel::{MessageCache, TieredCache};
/// # futures::executor::block_on(async {
///
/// let cache = MessageCache::new(TieredCache::builder().memory().build());
///
/// let digest = cache.put("cat").await.unwrap();
/// assert_eq!(
///     digest.as_str(),
///     "77af778b51abd4a3c51c5ddd97204a9c3ae614ebccb75a606c3b6865aed6744e"
/// );
/// assert_eq!(cache.get(digest.as_str()).await.as_deref(), Some("cat"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MessageCache<S = TieredCache> {
    store: S,
}

impl<S: Store> MessageCache<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores `message` and returns its digest.
    ///
    /// Storing the same message again succeeds and returns the same digest.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty message, or the first error any tier
    /// reports while writing.
    pub async fn put(&self, message: &str) -> Result<Digest, Error> {
        let digest = Digest::of(message);
        self.store.put(digest.as_str(), message).await?;
        Ok(digest)
    }

    /// Looks up the message stored under `digest`.
    ///
    /// Unknown and malformed digests both come back as `None`.
    pub async fn get(&self, digest: &str) -> Option<String> {
        self.store.get(digest).await
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
