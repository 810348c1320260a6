use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::PairingEngine;

use crate::{BackendError, CurvePoint, FieldElement, HexEncoding, TargetGroup};

/// Main backend trait that ties together all cryptographic operations.
///
/// Concrete backends (like [`PairingEngine`]) implement it to expose their
/// scalar field, both source groups, the target group and the pairing map.
/// Implementations are stateless: pairing is a pure function and may be
/// evaluated concurrently from any number of threads.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// use kzg_route::{CurvePoint, FieldElement, Fr, PairingBackend, PairingEngine, TargetGroup};
///
/// // Access backend types
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let a = Fr::from_u64(6);
/// let b = Fr::from_u64(7);
/// let g1 = G1::generator();
/// let g2 = G2::generator();
///
/// // Bilinearity: e(a*P, b*Q) = e(P, Q)^(ab)
/// let lhs = PairingEngine::pairing(&g1.mul_scalar(&a), &g2.mul_scalar(&b));
/// let rhs = PairingEngine::pairing(&g1, &g2).mul_scalar(&(a * b));
/// assert_eq!(lhs, rhs);
/// ```
pub trait PairingBackend:
    Clone + Copy + Default + PartialEq + Eq + Send + Sync + Debug + Sized + 'static
{
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar> + HexEncoding;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar> + HexEncoding;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and multiplying,
    /// since the final exponentiation is shared.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}
