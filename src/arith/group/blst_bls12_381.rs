//! blst-backed public-key group implementation for BLS12-381.
//!
//! Implements the [`CurvePoint`] trait for G1 of BLS12-381 using the
//! `blstrs` crate. Public keys live in G1 with a 48-byte compressed
//! encoding, matching the distributed-wallet key format.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{G1Affine, G1Projective, Scalar};
use group::{Curve, Group};

use crate::arith::group::CurvePoint;
use crate::errors::BackendError;

pub type G1 = G1Projective;

const G1_COMPRESSED_BYTES: usize = 48;

impl CurvePoint<Scalar> for G1Projective {
    type Affine = G1Affine;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn multi_scalar_multiplication(points: &[Self], scalars: &[Scalar]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );
        G1Projective::multi_exp(points, scalars)
    }

    fn to_compressed(&self) -> Vec<u8> {
        self.to_affine().to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let mut repr = [0u8; G1_COMPRESSED_BYTES];
        if bytes.len() != G1_COMPRESSED_BYTES {
            return Err(BackendError::Serialization("invalid point length"));
        }
        repr.copy_from_slice(bytes);
        Option::<G1Affine>::from(G1Affine::from_compressed(&repr))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid point bytes"))
    }
}
