mod scheme;
pub use scheme::{Commitment, KZG, OpeningProof};

mod setup;
pub use setup::SRS;

use core::fmt::Debug;

use crate::{BackendError, PairingBackend, Polynomial};

/// KZG polynomial commitment scheme interface.
///
/// This trait provides the single-point operations of Kate-Zaverucha-Goldberg
/// (KZG) commitments, which the route protocol uses to bind every node's
/// secret to its position on the route.
///
/// # KZG Commitments
///
/// KZG commitments allow committing to a polynomial such that:
/// - The commitment is succinct (one G1 element)
/// - One can prove evaluations at specific points with one G1 element
/// - Verification needs only the public parameters, never the setup secret
///
/// # Example
///
/// ```rust
/// use kzg_route::{
///     DensePolynomial, FieldElement, Fr, KZG, PairingEngine, PolynomialCommitment, SRS,
/// };
///
/// let params: SRS<PairingEngine> = KZG::setup(8, b"example seed")?;
/// let poly = DensePolynomial::from_coefficients_vec(vec![
///     Fr::from_u64(1),
///     Fr::from_u64(2),
///     Fr::from_u64(3),
/// ]);
/// let commitment = KZG::commit_g1(&params, &poly)?;
/// let point = Fr::from_u64(5);
/// let (value, proof) = KZG::open_g1(&params, &poly, &point)?;
/// assert!(KZG::verify_g1(&params, &commitment, &point, &value, &proof)?);
/// # Ok::<(), kzg_route::BackendError>(())
/// ```
pub trait PolynomialCommitment<B: PairingBackend>: Send + Sync + Debug + 'static {
    /// Commitment parameters (powers of tau).
    type Parameters: Clone + Send + Sync + Debug + 'static;

    /// Polynomial type used by this commitment scheme.
    type Polynomial: Polynomial<B::Scalar>;

    /// Performs a deterministic trusted setup for polynomials up to `max_degree`.
    ///
    /// This generates powers of tau: `[τ^0, τ^1, ..., τ^max_degree]` in both G1 and G2.
    /// The secret `tau` is discarded before returning.
    fn setup(max_degree: usize, seed: &[u8]) -> Result<Self::Parameters, BackendError>;

    /// Commits to a polynomial in G1.
    ///
    /// For polynomial `p(x) = ∑ c_i * x^i`, returns `∑ c_i * τ^i * G1`.
    fn commit_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<Commitment<B>, BackendError>;

    /// Opens a commitment at a point in G1, returning the evaluation and proof.
    fn open_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, OpeningProof<B>), BackendError>;

    /// Verifies a commitment opening in G1.
    ///
    /// A mismatch yields `Ok(false)`; only unusable parameters produce an error.
    fn verify_g1(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &OpeningProof<B>,
    ) -> Result<bool, BackendError>;
}
