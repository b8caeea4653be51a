//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the arithmetic
//! layer as well as the high-level `Error` type used across the crate.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code. Every error is terminal for the operation
//! that raised it: the crate performs no internal retries, since each error
//! reflects either malformed input or a logic inconsistency.

use thiserror::Error;

/// Errors bubbled up from the arithmetic backend (field/point codecs, math).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// High-level errors returned by the key-splitting API.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameter validation failure (threshold bounds, duplicate participants,
    /// malformed seed, oversized deterministic expansion).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A participant identifier does not encode to a usable field element.
    #[error("invalid participant identifier {id}: {reason}")]
    InvalidIdentifier { id: u64, reason: &'static str },

    /// Bytes drawn from the deterministic keystream do not decode to a field
    /// element. Fatal: resampling would silently break determinism.
    #[error("keystream bytes for coefficient {index} do not decode to a field element")]
    MalformedKeyMaterial { index: usize },

    /// Polynomial evaluation failed for one participant.
    #[error("failed to derive share for participant {id}")]
    ShareDerivation {
        id: u64,
        #[source]
        source: Box<Error>,
    },

    /// Two supplied shares encode to the same interpolation point.
    #[error("duplicate identifier {id} in share set")]
    DuplicateIdentifier { id: u64 },

    /// Reconstruction was given zero shares.
    #[error("share set is empty")]
    EmptyShareSet,

    /// The reconstructed public key does not equal the expected one. Carries
    /// the supplied share count and the session threshold so callers can tell
    /// an undersized subset apart from a genuine inconsistency.
    #[error(
        "reconstructed public key does not match the expected key \
         ({supplied} shares supplied, threshold {threshold})"
    )]
    KeyMismatch { supplied: usize, threshold: usize },

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
