// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Content digests used as storage keys.

use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// Number of hex characters in a [`Digest`].
pub const DIGEST_LEN: usize = 64;

/// The lowercase hex SHA-256 of a message.
///
/// A digest is always derived from content and never chosen by a caller, so two equal
/// messages always share a key.
///
/// # Examples
///
/// ```
/// use tiercel::Digest;
///
/// let digest = Digest::of("cat");
/// assert_eq!(
///     digest.as_str(),
///     "77af778b51abd4a3c51c5ddd97204a9c3ae614ebccb75a606c3b6865aed6744e"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Hashes `data` with SHA-256.
    #[must_use]
    pub fn of(data: impl AsRef<[u8]>) -> Self {
        Self(hex::encode(Sha256::digest(data.as_ref())))
    }

    /// Returns the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the digest, returning the hex string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Computes the digest of a message.
///
/// Total and deterministic: the empty message has a digest too. Rejecting empty
/// messages is left to the stores.
#[must_use]
pub fn digest(message: &str) -> Digest {
    Digest::of(message)
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Error returned when a string is not a well-formed digest.
#[ohno::error]
#[display("invalid digest")]
pub struct ParseDigestError;

impl FromStr for Digest {
    type Err = ParseDigestError;

    /// Parses 64 hex characters in either case; the result is lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_LEN {
            return Err(ParseDigestError::caused_by(format!(
                "expected {DIGEST_LEN} hex characters, found {}",
                s.len()
            )));
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseDigestError::caused_by("digest contains non-hex characters"));
        }

        Ok(Self(s.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "77af778b51abd4a3c51c5ddd97204a9c3ae614ebccb75a606c3b6865aed6744e";
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn known_vectors() {
        assert_eq!(digest("cat").as_str(), CAT);
        assert_eq!(digest("").as_str(), EMPTY);
    }

    #[test]
    fn deterministic() {
        let message = "the same words, twice";
        assert_eq!(digest(message), digest(message));
        assert_ne!(digest(message), digest("different words"));
    }

    #[test]
    fn fixed_length_lowercase_hex() {
        for message in ["a", "cat", "Hello, World!", "ünïcödé", &"x".repeat(10_000)] {
            let d = digest(message);
            assert_eq!(d.as_str().len(), DIGEST_LEN);
            assert!(d.as_str().bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')), "{d}");
        }
    }

    #[test]
    fn bytes_and_str_agree() {
        assert_eq!(Digest::of(b"cat"), digest("cat"));
    }

    #[test]
    fn display_and_conversions() {
        let d = digest("cat");
        assert_eq!(d.to_string(), CAT);
        assert_eq!(AsRef::<str>::as_ref(&d), CAT);
        assert_eq!(String::from(d.clone()), CAT);
        assert_eq!(d.into_string(), CAT);
    }

    #[test]
    fn parse_normalizes_case() {
        let parsed: Digest = CAT.to_ascii_uppercase().parse().unwrap();
        assert_eq!(parsed.as_str(), CAT);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let error = "77af".parse::<Digest>().unwrap_err();
        assert!(error.to_string().contains("expected 64 hex characters, found 4"), "{error}");
    }

    #[test]
    fn parse_rejects_non_hex() {
        let bad = "z".repeat(DIGEST_LEN);
        let error = bad.parse::<Digest>().unwrap_err();
        assert!(error.to_string().contains("non-hex"), "{error}");
    }
}
