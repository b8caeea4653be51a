//! Secret sharing polynomial.
//!
//! A degree-(T−1) polynomial over the scalar field whose constant term is the
//! secret being split. The polynomial exists only inside the splitting call:
//! its evaluations (shares) and its public image (verification vector) leave
//! the engine, the coefficients never do.

use crate::arith::{CurvePoint, FieldElement};

/// Sharing polynomial. Index 0 is the secret.
pub(crate) struct SecretPolynomial<F: FieldElement> {
    coefficients: Vec<F>,
}

impl<F: FieldElement> SecretPolynomial<F> {
    /// Builds the polynomial from the secret and the higher coefficients.
    pub(crate) fn new(secret: F, higher: Vec<F>) -> Self {
        let mut coefficients = Vec::with_capacity(higher.len() + 1);
        coefficients.push(secret);
        coefficients.extend(higher);
        Self { coefficients }
    }

    /// Threshold of the sharing session (coefficient count).
    pub(crate) fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the polynomial at `point` by Horner's method.
    pub(crate) fn evaluate(&self, point: &F) -> F {
        let mut acc = F::zero();
        for coefficient in self.coefficients.iter().rev() {
            acc = acc * *point + *coefficient;
        }
        acc
    }

    /// Public-key image of every coefficient, in coefficient order.
    pub(crate) fn commitments<P: CurvePoint<F>>(&self) -> Vec<P> {
        let generator = P::generator();
        self.coefficients
            .iter()
            .map(|coefficient| generator.mul_scalar(coefficient))
            .collect()
    }
}

impl<F: FieldElement> Drop for SecretPolynomial<F> {
    fn drop(&mut self) {
        // Coefficients are secret material; overwrite before the buffer is
        // released.
        for coefficient in self.coefficients.iter_mut() {
            *coefficient = F::zero();
        }
    }
}

#[cfg(all(test, feature = "blst"))]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arith::{Fr, G1};

    #[test]
    fn horner_matches_naive_evaluation() {
        let mut rng = StdRng::seed_from_u64(17);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..3).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher.clone());

        let x = Fr::random(&mut rng);
        let mut expected = secret;
        let mut power = x;
        for coefficient in &higher {
            expected += *coefficient * power;
            power *= x;
        }

        assert_eq!(poly.evaluate(&x), expected);
    }

    #[test]
    fn constant_term_is_the_value_at_zero() {
        let mut rng = StdRng::seed_from_u64(18);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..4).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher);

        assert_eq!(poly.evaluate(&Fr::zero()), secret);
        assert_eq!(poly.threshold(), 5);
    }

    #[test]
    fn degree_zero_polynomial_is_constant() {
        let mut rng = StdRng::seed_from_u64(19);
        let secret = Fr::random(&mut rng);
        let poly = SecretPolynomial::new(secret, Vec::new());

        for n in [1u64, 2, 99] {
            assert_eq!(poly.evaluate(&Fr::from_u64(n)), secret);
        }
    }

    #[test]
    fn commitments_are_coefficient_images() {
        let mut rng = StdRng::seed_from_u64(20);
        let secret = Fr::random(&mut rng);
        let higher: Vec<Fr> = (0..2).map(|_| Fr::random(&mut rng)).collect();
        let poly = SecretPolynomial::new(secret, higher.clone());

        let commitments: Vec<G1> = poly.commitments();
        assert_eq!(commitments.len(), 3);
        assert_eq!(commitments[0], G1::generator().mul_scalar(&secret));
        assert_eq!(commitments[1], G1::generator().mul_scalar(&higher[0]));
    }
}
