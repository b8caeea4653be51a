//! # keysplit: Threshold Splitting of BLS Signing Keys
//!
//! `keysplit` splits a single BLS12-381 signing secret into N shares such
//! that any T of them (the threshold) can jointly reconstruct the original
//! public key (and, with the matching secret shares, the original secret),
//! while any smaller subset reveals nothing. This is Shamir secret sharing
//! over the curve's scalar field, paired with a public verification vector
//! that lets any party check a share against the session's commitment
//! without learning secrets.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **[`arith`]**: Trait abstractions for the scalar field and the
//!   public-key group, with a blstrs BLS12-381 implementation behind the
//!   default `blst` feature.
//!
//! - **[`backend`]**: The [`KeyBackend`] binding between a scalar field and
//!   its public-key group ([`BlstBackend`] by default).
//!
//! - **[`config`]**: Session parameters ([`SplitParameters`]) and the
//!   deterministic keygen seed ([`KeygenSeed`]).
//!
//! - **[`id`]**: Participant identifier encoding into nonzero field
//!   elements.
//!
//! - **[`keygen`]**: Polynomial coefficient generation, random or
//!   seed-deterministic via an HKDF-SHA256 keystream.
//!
//! - **[`split`]**: The splitting engine ([`SplitKey`]) producing shares and
//!   the verification vector.
//!
//! - **[`lagrange`]**: Public-key and secret reconstruction by Lagrange
//!   interpolation at zero.
//!
//! - **[`wallet`]**: The distributed-wallet import bundle
//!   ([`AccountBundle`]).
//!
//! - **[`errors`]**: Error types for arithmetic and protocol operations.
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "blst")]
//! # fn main() -> Result<(), keysplit::Error> {
//! use keysplit::{
//!     reconstruct_public_key, BlstBackend, FieldElement, Fr, KeyBackend, SplitKey,
//!     SplitParameters,
//! };
//! use rand::thread_rng;
//!
//! // The secret comes from an already-decrypted keystore in production.
//! let mut rng = thread_rng();
//! let secret = Fr::random(&mut rng);
//! let public = BlstBackend::public_key(&secret);
//!
//! // 3-of-5 split.
//! let params = SplitParameters::new(3, vec![1, 2, 3, 4, 5], None)?;
//! let split = SplitKey::<BlstBackend>::split(&mut rng, secret, &params)?;
//!
//! // Sanity check: a threshold coalition recovers the original key.
//! split.verify(&public)?;
//!
//! // Any three public share images reconstruct the key.
//! let coalition: Vec<_> = split.public_shares().into_iter().take(3).collect();
//! assert_eq!(reconstruct_public_key::<BlstBackend>(&coalition)?, public);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "blst"))]
//! # fn main() {}
//! ```
//!
//! ## Deterministic Splits
//!
//! Passing a [`KeygenSeed`] makes the split reproducible: the same seed,
//! secret, and threshold always produce bit-identical shares and
//! verification vector, so an operator can re-derive a split independently
//! and compare. The seed is expanded once with HKDF-SHA256 under a fixed
//! versioned salt and sliced per coefficient, never read through a shared
//! cursor.
//!
//! ## Feature Flags
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//!
//! ## Security Considerations
//!
//! - **Secret lifetime**: The sharing polynomial lives only inside the
//!   splitting call and is wiped on drop; the seed and keystream buffers are
//!   zeroized.
//! - **Threshold security**: Fewer than T shares reveal nothing about the
//!   secret; the verification vector is safe to publish.
//! - **Reconstruction honesty**: The reconstruction engine interpolates
//!   whatever it is given. Callers must track the agreed threshold, since an
//!   undersized share set produces a well-defined but wrong key.

pub mod arith;
pub use arith::*;

pub mod backend;
pub use backend::*;

pub mod config;
pub use config::*;

pub mod errors;
pub use errors::*;

pub mod id;
pub use id::*;

pub mod keygen;
pub use keygen::*;

pub mod lagrange;
pub use lagrange::*;

mod poly;

pub mod split;
pub use split::*;

pub mod wallet;
pub use wallet::*;

pub mod serde_impl;
