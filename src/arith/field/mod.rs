use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::errors::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve,
/// providing the field operations the splitting scheme needs: polynomial
/// evaluation, Lagrange basis computation, and the canonical little-endian
/// byte codec shared by the identifier encoding and the deterministic
/// keystream.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use keysplit::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
///
/// let inv = a.invert().expect("non-zero element");
/// let bytes = a.to_le_bytes();
/// let recovered = Fr::from_le_bytes(&bytes).expect("canonical bytes");
/// # let _ = (inv, recovered);
/// ```
pub trait FieldElement:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Eq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Canonical encoding width in bytes (e.g. 32 for BLS12-381 scalars).
    const NUM_BYTES: usize;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Checks whether this element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    /// Serializes this element to its canonical little-endian bytes.
    fn to_le_bytes(&self) -> Vec<u8>;

    /// Deserializes an element from canonical little-endian bytes.
    ///
    /// Returns an error if the slice is not exactly [`Self::NUM_BYTES`] long
    /// or the value is not reduced modulo the field order. Non-canonical
    /// encodings are rejected, never silently reduced.
    fn from_le_bytes(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Performs batch inversion of a slice of field elements.
    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError>;
}
