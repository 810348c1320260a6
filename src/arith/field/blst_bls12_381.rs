//! blst-backed scalar field of BLS12-381.
//!
//! Implements [`FieldElement`] for `blstrs::Scalar`, the prime field of order
//! `0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = Scalar;

impl FieldElement for Scalar {
    type Repr = [u8; 32];

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn is_zero(&self) -> bool {
        Field::is_zero(self).into()
    }

    fn invert(&self) -> Result<Self, BackendError> {
        Option::<Scalar>::from(Field::invert(self)).ok_or(BackendError::DivisionByZero)
    }

    fn pow(&self, exp: &[u64; 4]) -> Self {
        self.pow_vartime(exp)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes_be()
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        Option::<Scalar>::from(Scalar::from_bytes_be(repr))
            .ok_or(BackendError::Serialization("scalar is not reduced modulo the field order"))
    }

    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError> {
        use ff::BatchInvert;

        if elements.is_empty() {
            return Ok(());
        }

        // Check for zero elements before batch inversion
        if elements.iter().any(|elem| bool::from(Field::is_zero(elem))) {
            return Err(BackendError::DivisionByZero);
        }

        // Use ff crate's batch inversion (Montgomery's trick)
        elements.iter_mut().batch_invert();

        Ok(())
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn from_u256(limbs: &[u64; 4]) -> Result<Self, BackendError> {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Option::<Scalar>::from(Scalar::from_bytes_le(&bytes))
            .ok_or(BackendError::Serialization("integer is not below the field modulus"))
    }

    fn to_u256(&self) -> [u64; 4] {
        let bytes = self.to_bytes_le();
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        limbs
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    // p - 1 as little-endian limbs.
    const MODULUS_MINUS_ONE: [u64; 4] = [
        0xffffffff00000000,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ];

    #[test]
    fn invert_zero_is_division_by_zero() {
        assert_eq!(
            FieldElement::invert(&Fr::zero()),
            Err(BackendError::DivisionByZero)
        );
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let a = Fr::from_u64(21);
        assert_eq!(
            FieldElement::div(&a, &Fr::zero()),
            Err(BackendError::DivisionByZero)
        );
        assert_eq!(FieldElement::div(&a, &Fr::from_u64(7)), Ok(Fr::from_u64(3)));
    }

    #[test]
    fn inverse_matches_fermat() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = <Fr as FieldElement>::random(&mut rng);
        // a^(p-2)
        let mut exp = MODULUS_MINUS_ONE;
        exp[0] -= 1;
        assert_eq!(FieldElement::invert(&a).unwrap(), FieldElement::pow(&a, &exp));
    }

    #[test]
    fn u256_conversion_rejects_modulus() {
        let max = Fr::from_u256(&MODULUS_MINUS_ONE).expect("p - 1 is canonical");
        assert_eq!(max + Fr::one(), Fr::zero());
        assert_eq!(max.to_u256(), MODULUS_MINUS_ONE);

        let mut modulus = MODULUS_MINUS_ONE;
        modulus[0] += 1;
        assert!(Fr::from_u256(&modulus).is_err());
    }

    #[test]
    fn small_integers_round_trip() {
        let x = Fr::from_u64(42);
        assert_eq!(x.to_u256(), [42, 0, 0, 0]);
        assert_eq!(Fr::from_u256(&[42, 0, 0, 0]).unwrap(), x);
        assert_eq!(Fr::from_repr(&x.to_repr()).unwrap(), x);
    }

    #[test]
    fn batch_inversion_rejects_zero() {
        let mut values = vec![Fr::from_u64(3), Fr::zero()];
        assert_eq!(
            Fr::batch_inversion(&mut values),
            Err(BackendError::DivisionByZero)
        );

        let mut values = vec![Fr::from_u64(3), Fr::from_u64(5)];
        Fr::batch_inversion(&mut values).unwrap();
        assert_eq!(values[0] * Fr::from_u64(3), Fr::one());
        assert_eq!(values[1] * Fr::from_u64(5), Fr::one());
    }
}
