use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the pairing-friendly curve,
/// providing the exact modular arithmetic used by interpolation, commitments and
/// the route protocol. Every value is kept reduced modulo the field order; the
/// only partial operation is [`invert`](FieldElement::invert).
///
/// # Type Parameters
///
/// - `Repr`: Byte representation type for serialization (`[u8; 32]` big-endian for BLS12-381 scalars)
///
/// # Example
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use kzg_route::{FieldElement, Fr};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let a = <Fr as FieldElement>::random(&mut rng);
///
/// // Field operations
/// let inv = FieldElement::invert(&a).expect("non-zero element");
/// assert_eq!(a * inv, Fr::one());
///
/// // Serialization
/// let bytes = FieldElement::to_repr(&a);
/// let recovered = <Fr as FieldElement>::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
/// ```
pub trait FieldElement:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Eq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Byte representation type (e.g., 32-byte array for bls12-381 scalars).
    type Repr: AsRef<[u8]>
        + AsMut<[u8]>
        + Default
        + Debug
        + Send
        + Sync
        + Clone
        + Eq
        + Hash
        + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Samples a uniformly distributed element using the provided RNG.
    ///
    /// Deterministic for a seeded RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool;

    /// Computes the multiplicative inverse.
    ///
    /// Fails with [`BackendError::DivisionByZero`] on zero.
    fn invert(&self) -> Result<Self, BackendError>;

    /// Raises this element to a power represented as a 256-bit little-endian integer.
    fn pow(&self, exp: &[u64; 4]) -> Self;

    /// Serializes this field element to its canonical byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is not reduced modulo the field order.
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;

    /// Performs batch inversion of a slice of field elements.
    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    /// Converts a 256-bit little-endian integer, rejecting values not below the modulus.
    fn from_u256(limbs: &[u64; 4]) -> Result<Self, BackendError>;

    /// Returns the canonical integer in `[0, p)` as 256-bit little-endian limbs.
    fn to_u256(&self) -> [u64; 4];

    /// Computes `self / other`.
    fn div(&self, other: &Self) -> Result<Self, BackendError> {
        Ok(*self * other.invert()?)
    }
}
