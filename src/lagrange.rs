//! Public-key and secret reconstruction via Lagrange interpolation.
//!
//! Any coalition holding at least `threshold` shares of a consistent sharing
//! polynomial can recover the polynomial's constant term by interpolating at
//! zero. Over the public images of the shares this recovers the joint public
//! key; over the secret shares themselves it recovers the original secret.
//!
//! The share slices passed to these functions behave as mappings: keys must
//! be unique and iteration order is irrelevant. The engine does not know the
//! session threshold: it interpolates whatever it is given, and a subset
//! smaller than the threshold yields a well-defined but incorrect key, which
//! is why callers track the agreed threshold independently.

use tracing::instrument;

use crate::arith::{CurvePoint, FieldElement};
use crate::backend::KeyBackend;
use crate::errors::Error;
use crate::id::encode_id;

/// Lagrange basis coefficients at zero for the given identifiers.
///
/// `λ_i = Π_{j≠i} x_j / (x_j − x_i)` over the encoded field points, with the
/// denominators inverted in one batch.
fn lagrange_basis_at_zero<F: FieldElement>(ids: &[u64]) -> Result<Vec<F>, Error> {
    if ids.is_empty() {
        return Err(Error::EmptyShareSet);
    }

    let points = ids
        .iter()
        .map(|&id| encode_id(id))
        .collect::<Result<Vec<F>, Error>>()?;

    // Equal points make a basis denominator vanish, so reject them up front.
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i] == points[j] {
                return Err(Error::DuplicateIdentifier { id: ids[j] });
            }
        }
    }

    let mut numerators = Vec::with_capacity(points.len());
    let mut denominators = Vec::with_capacity(points.len());
    for (i, x_i) in points.iter().enumerate() {
        let mut numerator = F::one();
        let mut denominator = F::one();
        for (j, x_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= *x_j;
            denominator *= *x_j - *x_i;
        }
        numerators.push(numerator);
        denominators.push(denominator);
    }

    F::batch_inversion(&mut denominators)?;

    Ok(numerators
        .into_iter()
        .zip(denominators)
        .map(|(numerator, inverse)| numerator * inverse)
        .collect())
}

/// Recovers the joint public key from public key shares.
///
/// `shares` behaves as a mapping from participant identifier to the public
/// image of that participant's secret share.
///
/// # Errors
///
/// - [`Error::EmptyShareSet`] for zero entries.
/// - [`Error::DuplicateIdentifier`] if two entries encode to the same field
///   point.
/// - [`Error::InvalidIdentifier`] if an identifier fails encoding.
#[instrument(level = "debug", skip_all, fields(shares = shares.len()))]
pub fn reconstruct_public_key<B: KeyBackend>(
    shares: &[(u64, B::Public)],
) -> Result<B::Public, Error> {
    let ids: Vec<u64> = shares.iter().map(|(id, _)| *id).collect();
    let lambdas = lagrange_basis_at_zero::<B::Scalar>(&ids)?;
    let points: Vec<B::Public> = shares.iter().map(|(_, point)| *point).collect();

    Ok(B::Public::multi_scalar_multiplication(&points, &lambdas))
}

/// Recovers the original secret from secret shares.
///
/// The scalar-field mirror of [`reconstruct_public_key`], with the same
/// mapping semantics and error contract.
#[instrument(level = "debug", skip_all, fields(shares = shares.len()))]
pub fn reconstruct_secret<B: KeyBackend>(
    shares: &[(u64, B::Scalar)],
) -> Result<B::Scalar, Error> {
    let ids: Vec<u64> = shares.iter().map(|(id, _)| *id).collect();
    let lambdas = lagrange_basis_at_zero::<B::Scalar>(&ids)?;

    let mut acc = B::Scalar::zero();
    for (lambda, (_, share)) in lambdas.iter().zip(shares) {
        acc += *lambda * *share;
    }
    Ok(acc)
}

#[cfg(all(test, feature = "blst"))]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arith::Fr;
    use crate::backend::BlstBackend;
    use crate::poly::SecretPolynomial;

    type Public = <BlstBackend as KeyBackend>::Public;

    fn share_points(poly: &SecretPolynomial<Fr>, ids: &[u64]) -> Vec<(u64, Public)> {
        ids.iter()
            .map(|&id| {
                let x = encode_id::<Fr>(id).unwrap();
                (id, BlstBackend::public_key(&poly.evaluate(&x)))
            })
            .collect()
    }

    #[test]
    fn basis_sums_to_one() {
        // Interpolating the constant polynomial 1 at zero must give 1.
        let lambdas: Vec<Fr> = lagrange_basis_at_zero(&[1, 5, 42, 1 << 40]).unwrap();
        let mut sum = Fr::zero();
        for lambda in lambdas {
            sum += lambda;
        }
        assert_eq!(sum, Fr::one());
    }

    #[test]
    fn any_threshold_subset_recovers_the_key() {
        let mut rng = StdRng::seed_from_u64(7);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..2).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher);
        let expected = BlstBackend::public_key(&secret);

        let low = share_points(&poly, &[1, 2, 3]);
        let high = share_points(&poly, &[3, 4, 5]);

        assert_eq!(reconstruct_public_key::<BlstBackend>(&low).unwrap(), expected);
        assert_eq!(reconstruct_public_key::<BlstBackend>(&high).unwrap(), expected);
    }

    #[test]
    fn subsets_agree_regardless_of_order() {
        let mut rng = StdRng::seed_from_u64(8);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..3).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher);

        let forward = share_points(&poly, &[2, 9, 11, 40]);
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            reconstruct_public_key::<BlstBackend>(&forward).unwrap(),
            reconstruct_public_key::<BlstBackend>(&reversed).unwrap()
        );
    }

    #[test]
    fn undersized_subset_yields_a_different_key() {
        let mut rng = StdRng::seed_from_u64(9);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..2).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher);
        let expected = BlstBackend::public_key(&secret);

        let undersized = share_points(&poly, &[1, 2]);
        let recovered = reconstruct_public_key::<BlstBackend>(&undersized).unwrap();
        assert_ne!(recovered, expected);
    }

    #[test]
    fn secret_shares_recover_the_secret() {
        let mut rng = StdRng::seed_from_u64(10);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..2).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher);

        let shares: Vec<(u64, Fr)> = [5u64, 8, 13]
            .iter()
            .map(|&id| {
                let x = encode_id::<Fr>(id).unwrap();
                (id, poly.evaluate(&x))
            })
            .collect();

        assert_eq!(reconstruct_secret::<BlstBackend>(&shares).unwrap(), secret);
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let mut rng = StdRng::seed_from_u64(11);
        let point = BlstBackend::public_key(&Fr::random(&mut rng));
        let shares = vec![(1u64, point), (2, point), (1, point)];

        let err = reconstruct_public_key::<BlstBackend>(&shares);
        assert!(matches!(err, Err(Error::DuplicateIdentifier { id: 1 })));
    }

    #[test]
    fn empty_share_set_is_rejected() {
        let err = reconstruct_public_key::<BlstBackend>(&[]);
        assert!(matches!(err, Err(Error::EmptyShareSet)));
    }

    #[test]
    fn invalid_identifier_propagates() {
        let mut rng = StdRng::seed_from_u64(12);
        let point = BlstBackend::public_key(&Fr::random(&mut rng));
        let err = reconstruct_public_key::<BlstBackend>(&[(0, point)]);
        assert!(matches!(err, Err(Error::InvalidIdentifier { id: 0, .. })));
    }
}
