//! blst-backed scalar field implementation for BLS12-381.
//!
//! Implements the [`FieldElement`] trait for the BLS12-381 scalar field Fr
//! using the `blstrs` crate.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::Scalar;
use ff::{BatchInvert, Field};
use rand_core::RngCore;

use crate::arith::field::FieldElement;
use crate::errors::BackendError;

pub type Fr = Scalar;

impl FieldElement for Scalar {
    const NUM_BYTES: usize = 32;

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn is_zero(&self) -> bool {
        bool::from(Field::is_zero(self))
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        self.to_bytes_le().to_vec()
    }

    fn from_le_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        let mut repr = [0u8; Self::NUM_BYTES];
        if bytes.len() != Self::NUM_BYTES {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        repr.copy_from_slice(bytes);
        Option::<Scalar>::from(Scalar::from_bytes_le(&repr))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }

    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError> {
        if elements.is_empty() {
            return Ok(());
        }

        // Montgomery's trick breaks down on zero elements, so reject them first.
        for elem in elements.iter() {
            if bool::from(Field::is_zero(elem)) {
                return Err(BackendError::Math("cannot invert zero element"));
            }
        }

        elements.iter_mut().batch_invert();

        Ok(())
    }
}
