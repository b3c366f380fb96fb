// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for store operations.
//!
//! Reads never produce an [`Error`]; only writes do. The [`ErrorKind`] tells a caller
//! whether the write was refused up front or failed in the backing store, and the
//! [`Recovery`] implementation tells it whether trying again can help.

use std::fmt;

use recoverable::{Recovery, RecoveryInfo};

/// Message carried by every validation error.
pub const EMPTY_ENTRY: &str = "empty key or value";

/// The class of failure behind an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The key or the value was empty, so the entry was never written.
    Validation,
    /// The backing store could not complete the write.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => f.write_str("validation"),
            Self::Transport => f.write_str("transport"),
        }
    }
}

/// An error from a store write.
///
/// Wraps the underlying cause; use [`std::error::Error::source()`] or
/// [`ohno::ErrorExt::find_source`] to reach it.
///
/// # Examples
///
/// ```
/// use tiercel_store::{Error, ErrorKind};
///
/// let error = Error::empty_entry();
/// assert_eq!(error.kind(), ErrorKind::Validation);
/// ```
#[ohno::error]
#[display("store {kind} error")]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Creates the error returned when a key or value is empty.
    #[must_use]
    pub fn empty_entry() -> Self {
        Self::caused_by(ErrorKind::Validation, EMPTY_ENTRY)
    }

    /// Creates an error for a write the backing store could not complete.
    pub fn transport(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::caused_by(ErrorKind::Transport, cause)
    }

    /// Returns the class of this failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the entry was refused before reaching storage.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

impl Recovery for Error {
    fn recovery(&self) -> RecoveryInfo {
        match self.kind {
            ErrorKind::Validation => RecoveryInfo::never(),
            ErrorKind::Transport => RecoveryInfo::retry(),
        }
    }
}

/// A specialized [`Result`] type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
