use tracing::instrument;

use crate::{
    BackendError, CurvePoint, DensePolynomial, Fr, PairingBackend, Polynomial,
    PolynomialCommitment, TargetGroup,
};

use super::SRS;

/// KZG over any pairing backend whose scalar field is the BLS12-381 `Fr`.
#[derive(Debug)]
pub struct KZG;

/// A commitment to a polynomial: one G1 element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment<B: PairingBackend>(pub B::G1);

/// A proof that a committed polynomial takes a given value at a given point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningProof<B: PairingBackend>(pub B::G1);

/// Multi-scalar multiplication of the non-trailing coefficients against the G1 powers.
fn commit_dense<B: PairingBackend<Scalar = Fr>>(
    params: &SRS<B>,
    polynomial: &DensePolynomial,
) -> Result<B::G1, BackendError> {
    let degree = polynomial.degree();
    params.ensure_supports(degree)?;
    let scalars = &polynomial.coeffs()[..=degree];
    B::G1::multi_scalar_mul(&params.powers_of_g()[..=degree], scalars)
}

impl<B: PairingBackend<Scalar = Fr>> PolynomialCommitment<B> for KZG {
    type Parameters = SRS<B>;
    type Polynomial = DensePolynomial;

    fn setup(max_degree: usize, seed: &[u8]) -> Result<Self::Parameters, BackendError> {
        SRS::from_seed(seed, max_degree)
    }

    #[instrument(level = "trace", skip_all)]
    fn commit_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<Commitment<B>, BackendError> {
        commit_dense(params, polynomial).map(Commitment)
    }

    #[instrument(level = "trace", skip_all)]
    fn open_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, OpeningProof<B>), BackendError> {
        let degree = polynomial.degree();
        params.ensure_supports(degree)?;

        let trimmed =
            DensePolynomial::from_coefficients_vec(polynomial.coeffs()[..=degree].to_vec());
        // p(X) - p(z) = (X - z) q(X); the remainder of the division is p(z).
        let (quotient, value) = trimmed.divide_by_linear(point);
        let proof = commit_dense(params, &quotient)?;
        Ok((value, OpeningProof(proof)))
    }

    #[instrument(level = "trace", skip_all)]
    fn verify_g1(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &OpeningProof<B>,
    ) -> Result<bool, BackendError> {
        let powers_of_h = params.powers_of_h();
        if powers_of_h.len() < 2 {
            return Err(BackendError::SrsTooShort {
                degree: 1,
                supported: params.max_degree(),
            });
        }
        let g = B::G1::generator();
        let h = powers_of_h[0];

        // e(C - y G, H) * e(-pi, tau H - z H) == 1
        let lhs_g1 = commitment.0.sub(&g.mul_scalar(value));
        let rhs_g2 = powers_of_h[1].sub(&h.mul_scalar(point));
        let product = B::multi_pairing(&[lhs_g1, proof.0.negate()], &[h, rhs_g2])?;
        Ok(product == B::Target::identity())
    }
}
