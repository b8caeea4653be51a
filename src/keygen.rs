//! Polynomial coefficient generation.
//!
//! The non-constant coefficients of the sharing polynomial come from one of
//! two sources:
//!
//! - **Random**: each coefficient is drawn uniformly from the scalar field
//!   using a caller-supplied CSPRNG.
//! - **Deterministic**: a caller-supplied 32-byte seed is expanded with
//!   HKDF-SHA256 into a keystream, and each coefficient is decoded from its
//!   own fixed-width slice of that stream. The same seed always reproduces
//!   the same polynomial, which lets an operator re-derive a split
//!   independently and compare results across implementations.
//!
//! The keystream is expanded once into an owned buffer and sliced by
//! coefficient index. Coefficients never share a read cursor, so derivation
//! can be parallelized without touching the stream contract: slice `i` always
//! holds the bytes of coefficient `i + 1` of the polynomial (the constant
//! term is never drawn from the stream).

use hkdf::Hkdf;
use rand_core::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::arith::FieldElement;
use crate::config::KeygenSeed;
use crate::errors::Error;

/// HKDF salt for deterministic coefficient expansion.
///
/// This constant is the keystream version tag: changing it changes every
/// seed-derived polynomial and is a deliberate compatibility break.
pub const KEYGEN_SALT: &[u8] = b"SPLIT-BLS-KEYGEN-";

/// Pre-expanded deterministic keystream.
///
/// Holds `count` fixed-width slices of HKDF-SHA256 output, one per
/// non-constant polynomial coefficient. The buffer is wiped on drop.
pub struct KeygenStream {
    okm: Zeroizing<Vec<u8>>,
    width: usize,
}

impl KeygenStream {
    /// Expands `seed` into key material for `count` coefficients of field `F`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the requested length exceeds what a single
    /// HKDF expansion can supply (255 hash blocks).
    pub fn expand<F: FieldElement>(seed: &[u8], count: usize) -> Result<Self, Error> {
        let width = F::NUM_BYTES;
        let mut okm = Zeroizing::new(vec![0u8; count * width]);

        let hk = Hkdf::<Sha256>::new(Some(KEYGEN_SALT), seed);
        hk.expand(&[], &mut okm).map_err(|_| {
            Error::InvalidConfig(format!(
                "deterministic keygen cannot supply {count} coefficients in one expansion"
            ))
        })?;

        Ok(Self { okm, width })
    }

    /// Number of coefficients this stream was expanded for.
    pub fn len(&self) -> usize {
        self.okm.len() / self.width
    }

    /// Whether the stream holds no coefficient material.
    pub fn is_empty(&self) -> bool {
        self.okm.is_empty()
    }

    /// Decodes the coefficient at `index` from its slice of the stream.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedKeyMaterial`] if the slice does not decode to a
    /// canonical field element. This is fatal: drawing replacement bytes
    /// would silently change the seed-to-polynomial mapping.
    pub fn coefficient<F: FieldElement>(&self, index: usize) -> Result<F, Error> {
        let start = index * self.width;
        let bytes = self
            .okm
            .get(start..start + self.width)
            .ok_or_else(|| Error::InvalidConfig(format!("coefficient index {index} out of range")))?;

        F::from_le_bytes(bytes).map_err(|_| Error::MalformedKeyMaterial { index })
    }
}

/// Produces the `count` non-constant coefficients of a sharing polynomial.
///
/// With `seed = None` the coefficients are drawn from `rng`; otherwise they
/// are decoded from the seed's pre-expanded keystream in ascending index
/// order.
pub fn generate_coefficients<F, R>(
    rng: &mut R,
    count: usize,
    seed: Option<&KeygenSeed>,
) -> Result<Vec<F>, Error>
where
    F: FieldElement,
    R: RngCore + ?Sized,
{
    match seed {
        None => Ok((0..count).map(|_| F::random(rng)).collect()),
        Some(seed) => {
            let stream = KeygenStream::expand::<F>(seed.as_bytes(), count)?;
            (0..count).map(|index| stream.coefficient::<F>(index)).collect()
        }
    }
}

#[cfg(all(test, feature = "blst"))]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arith::Fr;

    fn sample_seed(fill: u8) -> KeygenSeed {
        KeygenSeed::new([fill; 32])
    }

    #[test]
    fn same_seed_reproduces_coefficients() {
        let mut rng = StdRng::from_entropy();
        let seed = sample_seed(0x5a);

        let a: Vec<Fr> = generate_coefficients(&mut rng, 4, Some(&seed)).unwrap();
        let b: Vec<Fr> = generate_coefficients(&mut rng, 4, Some(&seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng = StdRng::from_entropy();

        let a: Vec<Fr> = generate_coefficients(&mut rng, 4, Some(&sample_seed(1))).unwrap();
        let b: Vec<Fr> = generate_coefficients(&mut rng, 4, Some(&sample_seed(2))).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn random_path_diverges_between_calls() {
        let mut rng = StdRng::from_entropy();

        let a: Vec<Fr> = generate_coefficients(&mut rng, 4, None).unwrap();
        let b: Vec<Fr> = generate_coefficients(&mut rng, 4, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn stream_slices_are_independent_of_read_order() {
        let seed = sample_seed(0xc3);
        let stream = KeygenStream::expand::<Fr>(seed.as_bytes(), 5).unwrap();
        assert_eq!(stream.len(), 5);

        let forward: Vec<Fr> = (0..5).map(|i| stream.coefficient(i).unwrap()).collect();
        let backward: Vec<Fr> = (0..5).rev().map(|i| stream.coefficient(i).unwrap()).collect();

        assert_eq!(
            forward,
            backward.into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn shorter_expansion_is_a_prefix_of_a_longer_one() {
        let seed = sample_seed(0x11);
        let short = KeygenStream::expand::<Fr>(seed.as_bytes(), 2).unwrap();
        let long = KeygenStream::expand::<Fr>(seed.as_bytes(), 6).unwrap();

        for index in 0..2 {
            let a: Fr = short.coefficient(index).unwrap();
            let b: Fr = long.coefficient(index).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn oversized_expansion_is_rejected() {
        let seed = sample_seed(0x22);
        // HKDF-SHA256 expansion is capped at 255 * 32 bytes.
        let err = KeygenStream::expand::<Fr>(seed.as_bytes(), 256);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let seed = sample_seed(0x33);
        let stream = KeygenStream::expand::<Fr>(seed.as_bytes(), 2).unwrap();
        let err = stream.coefficient::<Fr>(2);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }
}
