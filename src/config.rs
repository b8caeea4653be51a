//! Configuration types for a key-splitting session.
//!
//! This module validates the inputs the command surface hands to the engine:
//! the signature threshold, the set of participant identifiers, and the
//! optional deterministic keygen seed.
//!
//! # Example
//!
//! ```rust
//! use keysplit::{KeygenSeed, SplitParameters};
//!
//! // 3-of-5 split with a deterministic seed
//! let seed = KeygenSeed::from_hex(
//!     "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
//! ).expect("valid seed");
//! let params = SplitParameters::new(3, vec![1, 2, 3, 4, 5], Some(seed))
//!     .expect("valid params");
//! # let _ = params;
//! ```

use std::collections::HashSet;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::Error;

/// Fixed byte length of a deterministic keygen seed.
pub const KEYGEN_SEED_BYTES: usize = 32;

/// Seed for deterministic polynomial coefficient derivation.
///
/// Exactly 32 bytes; the hex constructor accepts exactly 64 hex characters.
/// The seed fully determines the non-constant polynomial coefficients, so it
/// is treated as secret material: wiped on drop, redacted in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeygenSeed([u8; KEYGEN_SEED_BYTES]);

impl KeygenSeed {
    /// Wraps raw seed bytes.
    pub fn new(bytes: [u8; KEYGEN_SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Decodes a seed from its hex encoding.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] unless the input is exactly
    /// `2 * KEYGEN_SEED_BYTES` hex characters.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        if s.len() != 2 * KEYGEN_SEED_BYTES {
            return Err(Error::InvalidConfig(format!(
                "keygen seed must be {} hex characters, got {}",
                2 * KEYGEN_SEED_BYTES,
                s.len()
            )));
        }

        let raw = hex::decode(s)
            .map_err(|e| Error::InvalidConfig(format!("keygen seed is not valid hex: {e}")))?;

        let mut bytes = [0u8; KEYGEN_SEED_BYTES];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KeygenSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeygenSeed(..)")
    }
}

/// Validated parameters for one key-splitting session.
///
/// Construct through [`SplitParameters::new`], which enforces the invariants
/// the engine relies on: a positive threshold no larger than the participant
/// count, and pairwise-distinct participant identifiers.
#[derive(Clone, Debug)]
pub struct SplitParameters {
    /// Number of shares required to reconstruct the key.
    pub threshold: usize,
    /// Participant identifiers, one share each.
    pub participants: Vec<u64>,
    /// Optional deterministic keygen seed.
    pub seed: Option<KeygenSeed>,
}

impl SplitParameters {
    /// Validates and builds session parameters.
    ///
    /// Identifier *encodability* (nonzero, canonical) is the engine's
    /// responsibility; this constructor only enforces the set-level
    /// invariants the command surface promises.
    pub fn new(
        threshold: usize,
        participants: Vec<u64>,
        seed: Option<KeygenSeed>,
    ) -> Result<Self, Error> {
        if threshold == 0 {
            return Err(Error::InvalidConfig(
                "threshold must be greater than 0".into(),
            ));
        }
        if participants.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one participant is required".into(),
            ));
        }
        if threshold > participants.len() {
            return Err(Error::InvalidConfig(format!(
                "threshold {threshold} exceeds participant count {}",
                participants.len()
            )));
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for &id in &participants {
            if !seen.insert(id) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate participant identifier {id}"
                )));
            }
        }

        Ok(Self {
            threshold,
            participants,
            seed,
        })
    }
}
