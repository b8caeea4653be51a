use std::fmt::Debug;

use crate::arith::field::FieldElement;
use crate::errors::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::G1;

/// Elliptic curve point abstraction for the public-key group.
///
/// This trait provides the group operations the scheme needs on public-key
/// points: scalar multiplication for deriving key images, addition and
/// multi-scalar multiplication for Lagrange aggregation, and the compressed
/// byte codec used when a point crosses the wallet boundary.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use keysplit::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = Fr::random(&mut rng);
///
/// let point = G1::generator().mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// # let _ = doubled;
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Associated affine representation.
    type Affine: Clone + Copy + Debug + Send + Sync + 'static;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Computes `Σ scalars[i] · points[i]`.
    ///
    /// Backends are expected to override this with an optimized multi-exp;
    /// the default is a plain fold over [`add`](Self::add) and
    /// [`mul_scalar`](Self::mul_scalar).
    fn multi_scalar_multiplication(points: &[Self], scalars: &[F]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );
        points
            .iter()
            .zip(scalars.iter())
            .fold(Self::identity(), |acc, (point, scalar)| {
                acc.add(&point.mul_scalar(scalar))
            })
    }

    /// Serializes this point to its compressed byte representation.
    fn to_compressed(&self) -> Vec<u8>;

    /// Deserializes a point from its compressed byte representation.
    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError>;
}
