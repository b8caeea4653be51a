//! Threshold splitting of a signing secret.
//!
//! The splitting engine takes a scalar signing secret and a validated
//! [`SplitParameters`] and produces one [`Share`] per participant plus the
//! public [`VerificationVector`]. Any `threshold` shares jointly reconstruct
//! the original public key (see [`crate::lagrange`]); fewer reveal nothing.
//!
//! The sharing polynomial is built inside [`SplitKey::split`], evaluated at
//! every participant's encoded identifier, and dropped before the call
//! returns. Only the shares and the verification vector survive.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "blst")]
//! # fn main() -> Result<(), keysplit::Error> {
//! use keysplit::{
//!     reconstruct_public_key, BlstBackend, FieldElement, Fr, KeyBackend, SplitKey,
//!     SplitParameters,
//! };
//! use rand::thread_rng;
//!
//! let mut rng = thread_rng();
//! let secret = Fr::random(&mut rng);
//! let expected = BlstBackend::public_key(&secret);
//!
//! let params = SplitParameters::new(3, vec![1, 2, 3, 4, 5], None)?;
//! let split = SplitKey::<BlstBackend>::split(&mut rng, secret, &params)?;
//!
//! // Any three public share images recover the original key.
//! let coalition: Vec<_> = split.public_shares().into_iter().take(3).collect();
//! assert_eq!(reconstruct_public_key::<BlstBackend>(&coalition)?, expected);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "blst"))]
//! # fn main() {}
//! ```

use std::collections::HashMap;
use std::fmt;

use rand_core::RngCore;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::backend::KeyBackend;
use crate::config::SplitParameters;
use crate::errors::Error;
use crate::id::encode_id;
use crate::keygen::generate_coefficients;
use crate::lagrange::reconstruct_public_key;
use crate::poly::SecretPolynomial;

/// One participant's secret share: the sharing polynomial evaluated at the
/// participant's encoded identifier.
#[derive(Clone)]
pub struct Share<B: KeyBackend> {
    /// Participant identifier this share was derived for.
    pub id: u64,
    /// Share value in the scalar field. Secret material.
    pub scalar: B::Scalar,
}

impl<B: KeyBackend> Share<B> {
    /// Public image of this share.
    pub fn public(&self) -> B::Public {
        B::public_key(&self.scalar)
    }
}

impl<B: KeyBackend> fmt::Debug for Share<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("id", &self.id)
            .field("scalar", &"<redacted>")
            .finish()
    }
}

/// Public image of every polynomial coefficient, in coefficient order.
///
/// Length equals the threshold. Safe to disclose: any party can use it to
/// check a share against the session's public commitment without learning
/// secrets. The first entry is the public key of the split secret.
#[derive(Debug)]
pub struct VerificationVector<B: KeyBackend> {
    points: Vec<B::Public>,
}

impl<B: KeyBackend> VerificationVector<B> {
    pub(crate) fn new(points: Vec<B::Public>) -> Self {
        Self { points }
    }

    /// Number of entries (the session threshold).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the vector holds no entries. Never true for a vector produced
    /// by [`SplitKey::split`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Commitment points in coefficient order.
    pub fn points(&self) -> &[B::Public] {
        &self.points
    }

    /// Public key of the split secret (the constant-term image).
    pub fn public_key(&self) -> &B::Public {
        &self.points[0]
    }
}

impl<B: KeyBackend> Clone for VerificationVector<B> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
        }
    }
}

impl<B: KeyBackend> PartialEq for VerificationVector<B> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<B: KeyBackend> Eq for VerificationVector<B> {}

/// Result of one key-splitting session.
///
/// Holds the per-participant shares (keys unique, iteration order
/// irrelevant), the verification vector, and the threshold. The sharing
/// polynomial itself is not retained.
pub struct SplitKey<B: KeyBackend> {
    threshold: usize,
    shares: HashMap<u64, Share<B>>,
    verification_vector: VerificationVector<B>,
}

impl<B: KeyBackend> SplitKey<B> {
    /// Splits `secret` into one share per participant.
    ///
    /// Builds the sharing polynomial (constant term `secret`, higher
    /// coefficients from `rng` or the seed's keystream), evaluates it at
    /// every participant's encoded identifier, and derives the verification
    /// vector. The polynomial is dropped before this returns.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] for a zero threshold or an oversized
    ///   deterministic expansion.
    /// - [`Error::MalformedKeyMaterial`] if seeded keystream bytes fail to
    ///   decode.
    /// - [`Error::ShareDerivation`] if a participant identifier fails
    ///   encoding.
    #[instrument(
        level = "info",
        skip_all,
        fields(threshold = params.threshold, participants = params.participants.len())
    )]
    pub fn split<R: RngCore + ?Sized>(
        rng: &mut R,
        secret: B::Scalar,
        params: &SplitParameters,
    ) -> Result<Self, Error> {
        if params.threshold == 0 {
            return Err(Error::InvalidConfig(
                "threshold must be greater than 0".into(),
            ));
        }

        let higher =
            generate_coefficients(rng, params.threshold - 1, params.seed.as_ref())?;
        let polynomial = SecretPolynomial::new(secret, higher);

        let verification_vector = VerificationVector::new(polynomial.commitments::<B::Public>());

        // Identifiers are independent; evaluation shares no mutable state.
        let shares = params
            .participants
            .par_iter()
            .map(|&id| -> Result<(u64, Share<B>), Error> {
                let point = encode_id::<B::Scalar>(id).map_err(|source| {
                    Error::ShareDerivation {
                        id,
                        source: Box::new(source),
                    }
                })?;
                Ok((
                    id,
                    Share {
                        id,
                        scalar: polynomial.evaluate(&point),
                    },
                ))
            })
            .collect::<Result<HashMap<u64, Share<B>>, Error>>()?;

        drop(polynomial);

        Ok(Self {
            threshold: params.threshold,
            shares,
            verification_vector,
        })
    }

    /// Number of shares required to reconstruct the key.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// All shares, keyed by participant identifier.
    pub fn shares(&self) -> &HashMap<u64, Share<B>> {
        &self.shares
    }

    /// The share derived for `id`, if one exists in this session.
    pub fn share(&self, id: u64) -> Option<&Share<B>> {
        self.shares.get(&id)
    }

    /// The session's public verification vector.
    pub fn verification_vector(&self) -> &VerificationVector<B> {
        &self.verification_vector
    }

    /// Public key of the split secret.
    pub fn public_key(&self) -> &B::Public {
        self.verification_vector.public_key()
    }

    /// Public image of every share, as reconstruction input.
    pub fn public_shares(&self) -> Vec<(u64, B::Public)> {
        self.shares
            .values()
            .map(|share| (share.id, share.public()))
            .collect()
    }

    /// Consistency self-check: reconstructs the public key from `threshold`
    /// shares and compares it against `expected`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyMismatch`] if the reconstruction disagrees with
    /// `expected`; the error carries the supplied share count and the
    /// session threshold.
    #[instrument(level = "debug", skip_all, fields(threshold = self.threshold))]
    pub fn verify(&self, expected: &B::Public) -> Result<(), Error> {
        let coalition: Vec<(u64, B::Public)> = self
            .shares
            .values()
            .take(self.threshold)
            .map(|share| (share.id, share.public()))
            .collect();

        let recovered = reconstruct_public_key::<B>(&coalition)?;
        if recovered != *expected {
            return Err(Error::KeyMismatch {
                supplied: coalition.len(),
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "blst"))]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arith::{FieldElement, Fr};
    use crate::backend::BlstBackend;
    use crate::config::KeygenSeed;
    use crate::lagrange::reconstruct_secret;

    fn sample_params(seed: Option<KeygenSeed>) -> SplitParameters {
        SplitParameters::new(3, vec![1, 2, 3, 4, 5], seed).unwrap()
    }

    fn coalition(
        split: &SplitKey<BlstBackend>,
        ids: &[u64],
    ) -> Vec<(u64, <BlstBackend as KeyBackend>::Public)> {
        ids.iter()
            .map(|&id| {
                let share = split.share(id).unwrap();
                (id, share.public())
            })
            .collect()
    }

    #[test]
    fn split_produces_one_share_per_participant() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let expected = BlstBackend::public_key(&secret);

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();

        assert_eq!(split.threshold(), 3);
        assert_eq!(split.shares().len(), 5);
        assert_eq!(split.verification_vector().len(), 3);
        assert_eq!(*split.public_key(), expected);
    }

    #[test]
    fn threshold_subsets_recover_the_original_key() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let expected = BlstBackend::public_key(&secret);

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();

        let low = coalition(&split, &[1, 2, 3]);
        let high = coalition(&split, &[3, 4, 5]);
        let undersized = coalition(&split, &[1, 2]);

        assert_eq!(
            reconstruct_public_key::<BlstBackend>(&low).unwrap(),
            expected
        );
        assert_eq!(
            reconstruct_public_key::<BlstBackend>(&high).unwrap(),
            expected
        );
        assert_ne!(
            reconstruct_public_key::<BlstBackend>(&undersized).unwrap(),
            expected
        );
    }

    #[test]
    fn threshold_secret_shares_recover_the_secret() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();

        let shares: Vec<(u64, Fr)> = [2u64, 4, 5]
            .iter()
            .map(|&id| (id, split.share(id).unwrap().scalar))
            .collect();

        assert_eq!(reconstruct_secret::<BlstBackend>(&shares).unwrap(), secret);
    }

    #[test]
    fn seeded_splits_are_bit_identical() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let seed = KeygenSeed::new([0xab; 32]);

        let first = SplitKey::<BlstBackend>::split(
            &mut rng,
            secret,
            &sample_params(Some(seed.clone())),
        )
        .unwrap();
        let second =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(Some(seed)))
                .unwrap();

        for id in 1u64..=5 {
            assert_eq!(
                first.share(id).unwrap().scalar.to_le_bytes(),
                second.share(id).unwrap().scalar.to_le_bytes(),
                "share mismatch for participant {id}"
            );
        }
        assert_eq!(first.verification_vector(), second.verification_vector());
    }

    #[test]
    fn unseeded_splits_diverge() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);

        let first =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();
        let second =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();

        let diverged = (1u64..=5).any(|id| {
            first.share(id).unwrap().scalar != second.share(id).unwrap().scalar
        });
        assert!(diverged, "two random splits produced identical shares");
    }

    #[test]
    fn threshold_one_shares_are_the_secret_itself() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let params = SplitParameters::new(1, vec![1, 2, 3], None).unwrap();

        let split = SplitKey::<BlstBackend>::split(&mut rng, secret, &params).unwrap();

        for id in 1u64..=3 {
            assert_eq!(split.share(id).unwrap().scalar, secret);
        }
    }

    #[test]
    fn zero_identifier_fails_share_derivation() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        // Bypass parameter validation to hit the engine's own check.
        let params = SplitParameters {
            threshold: 2,
            participants: vec![1, 0, 3],
            seed: None,
        };

        let err = SplitKey::<BlstBackend>::split(&mut rng, secret, &params);
        assert!(matches!(err, Err(Error::ShareDerivation { id: 0, .. })));
    }

    #[test]
    fn verify_accepts_the_original_key() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let expected = BlstBackend::public_key(&secret);

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();
        split.verify(&expected).unwrap();
    }

    #[test]
    fn verify_rejects_a_foreign_key() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);
        let foreign = BlstBackend::public_key(&Fr::random(&mut rng));

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();

        let err = split.verify(&foreign);
        assert!(matches!(
            err,
            Err(Error::KeyMismatch {
                supplied: 3,
                threshold: 3
            })
        ));
    }

    #[test]
    fn share_debug_redacts_the_scalar() {
        let mut rng = StdRng::from_entropy();
        let secret = Fr::random(&mut rng);

        let split =
            SplitKey::<BlstBackend>::split(&mut rng, secret, &sample_params(None)).unwrap();
        let rendered = format!("{:?}", split.share(1).unwrap());
        assert!(rendered.contains("<redacted>"));
    }
}
