//! Backend binding between a scalar field and its public-key group.
//!
//! A [`KeyBackend`] ties together the two arithmetic abstractions the
//! splitting scheme is generic over: the scalar field the secret and shares
//! live in, and the curve group their public images live in. Concrete
//! backends are selected via feature flags; the default is blstrs over
//! BLS12-381 with public keys in G1.

use std::fmt::Debug;

use crate::arith::{CurvePoint, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::BlstBackend;

/// Default backend binding (blstrs over BLS12-381).
#[cfg(feature = "blst")]
pub type KeyEngine = BlstBackend;

/// Binding of a scalar field to the group its public keys live in.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use keysplit::{FieldElement, KeyBackend, KeyEngine};
///
/// let mut rng = thread_rng();
/// let secret = <KeyEngine as KeyBackend>::Scalar::random(&mut rng);
/// let public = KeyEngine::public_key(&secret);
/// # let _ = public;
/// ```
pub trait KeyBackend: Clone + Debug + Send + Sync + 'static {
    /// Scalar field of the curve.
    type Scalar: FieldElement;
    /// Group the public image of a scalar lives in.
    type Public: CurvePoint<Self::Scalar>;

    /// Public-key image of a secret scalar.
    fn public_key(secret: &Self::Scalar) -> Self::Public {
        Self::Public::generator().mul_scalar(secret)
    }
}
