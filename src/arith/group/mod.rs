use std::fmt::Debug;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// This trait provides operations on elliptic curve points in projective coordinates,
/// with support for conversion to affine coordinates and validated byte encodings.
/// Every value of an implementing type lies on the curve and in the prime-order
/// subgroup; decoding is the only way to construct a point from outside data and
/// it rejects anything else with [`BackendError::InvalidCurvePoint`].
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
/// - `Affine`: The affine representation of the curve point
///
/// # Example
///
/// ```rust
/// use kzg_route::{CurvePoint, FieldElement, Fr, G1};
///
/// let scalar = Fr::from_u64(5);
///
/// // Point operations
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// assert_eq!(doubled, g.mul_scalar(&Fr::from_u64(10)));
/// assert!(CurvePoint::<Fr>::is_identity(&point.add(&point.negate())));
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Associated affine representation.
    type Affine: Clone + Debug + Send + Sync + 'static + Copy;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Converts from projective to affine coordinates.
    fn to_affine(&self) -> Self::Affine;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Batch normalizes multiple projective points to affine coordinates.
    ///
    /// This is more efficient than normalizing points individually due to
    /// Montgomery's trick for batch inversion.
    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine>;

    /// Computes `∑ scalars[i] * points[i]`.
    ///
    /// Returns an error if the slices have different lengths.
    fn multi_scalar_mul(points: &[Self], scalars: &[F]) -> Result<Self, BackendError>;

    /// Serializes this point in compressed form.
    fn to_compressed(&self) -> Vec<u8>;

    /// Serializes this point as its uncompressed affine coordinates.
    fn to_uncompressed(&self) -> Vec<u8>;

    /// Decodes a compressed point, checking the curve equation and subgroup membership.
    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Decodes a point from its uncompressed affine coordinates, checking the
    /// curve equation and subgroup membership.
    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, which is
/// a multiplicative subgroup of the extension field (written additively by
/// the backend).
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// Scalar field type for scalar multiplication.
    type Scalar: FieldElement + Copy;

    /// Returns the multiplicative identity element.
    fn identity() -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;
}
