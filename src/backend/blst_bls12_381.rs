//! blst-backed backend binding for BLS12-381.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use crate::arith::{Fr, G1};
use crate::backend::KeyBackend;

/// blstrs backend: scalars in Fr, public keys in G1 (48-byte compressed).
#[derive(Clone, Copy, Debug)]
pub struct BlstBackend;

impl KeyBackend for BlstBackend {
    type Scalar = Fr;
    type Public = G1;
}
